use super::{router, NotesService};
use crate::tools::catalog;
use notes_store::NoteStore;
use rmcp::model::{Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool_handler, ServerHandler};

pub(crate) const SERVER_NAME: &str = "notes-server";

impl NotesService {
    pub fn new(store: NoteStore) -> Self {
        Self {
            store,
            tool_router: router::build_tool_registry(),
        }
    }
}

#[tool_handler]
impl ServerHandler for NotesService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(catalog::tool_instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
