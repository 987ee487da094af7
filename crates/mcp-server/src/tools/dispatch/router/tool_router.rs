use super::super::tool_registry::ToolRegistry;
use super::super::{McpError, NotesService};
use crate::tools::schemas::list_notes::ListNotesRequest;
use crate::tools::schemas::read_note::ReadNoteRequest;
use crate::tools::schemas::save_note::SaveNoteRequest;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use rmcp::{tool, tool_router};

pub(super) fn build_tool_registry() -> ToolRegistry<NotesService> {
    ToolRegistry::new(NotesService::tool_router())
}

#[tool_router]
impl NotesService {
    /// Save (or overwrite) a note.
    #[tool(description = "Save a markdown note to the dev-notes folder")]
    pub async fn save_note(
        &self,
        Parameters(request): Parameters<SaveNoteRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::save_note::save_note(self, request).await
    }

    /// List note filenames.
    #[tool(description = "List all saved note filenames")]
    pub async fn list_notes(
        &self,
        Parameters(request): Parameters<ListNotesRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::list_notes::list_notes(self, request).await
    }

    /// Read a note by title.
    #[tool(description = "Read the contents of a saved note")]
    pub async fn read_note(
        &self,
        Parameters(request): Parameters<ReadNoteRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::read_note::read_note(self, request).await
    }
}
