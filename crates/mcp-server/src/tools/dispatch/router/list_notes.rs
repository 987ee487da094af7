use super::super::{text_result, CallToolResult, McpError, NotesService};
use super::error::store_error;
use crate::tools::schemas::list_notes::ListNotesRequest;

pub(in crate::tools::dispatch) async fn list_notes(
    service: &NotesService,
    _request: ListNotesRequest,
) -> Result<CallToolResult, McpError> {
    let names = service
        .store()
        .list()
        .await
        .map_err(|err| store_error("list_notes", err))?;

    log::debug!("list_notes: {} note(s)", names.len());
    Ok(text_result(render_note_list(&names)))
}

pub(in crate::tools::dispatch) fn render_note_list(names: &[String]) -> String {
    if names.is_empty() {
        return "No notes found.".to_string();
    }
    format!("Found {} note(s):\n{}", names.len(), names.join("\n"))
}
