use notes_store::NoteStore;
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;

mod router;
mod service;
mod tool_registry;


/// Notes MCP Service
#[derive(Clone)]
pub struct NotesService {
    /// Backing note store
    store: NoteStore,
    /// Tool registry
    tool_router: tool_registry::ToolRegistry<Self>,
}

impl NotesService {
    pub(crate) fn store(&self) -> &NoteStore {
        &self.store
    }
}

fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}
