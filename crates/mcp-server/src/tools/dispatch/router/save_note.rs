use super::super::{text_result, CallToolResult, McpError, NotesService};
use super::error::store_error;
use crate::tools::schemas::save_note::SaveNoteRequest;

pub(in crate::tools::dispatch) async fn save_note(
    service: &NotesService,
    request: SaveNoteRequest,
) -> Result<CallToolResult, McpError> {
    let filename = service
        .store()
        .save(&request.title, &request.content)
        .await
        .map_err(|err| store_error("save_note", err))?;

    log::debug!("save_note: {:?} -> {filename}", request.title);
    Ok(text_result(format!("Note saved as {filename}")))
}
