use super::super::{text_result, CallToolResult, McpError, NotesService};
use super::error::store_error;
use crate::tools::schemas::read_note::ReadNoteRequest;
use notes_store::ReadOutcome;

pub(in crate::tools::dispatch) async fn read_note(
    service: &NotesService,
    request: ReadNoteRequest,
) -> Result<CallToolResult, McpError> {
    let outcome = service
        .store()
        .read(&request.title)
        .await
        .map_err(|err| store_error("read_note", err))?;

    let text = match outcome {
        ReadOutcome::Found(content) => content,
        ReadOutcome::NotFound { filename } => {
            log::debug!("read_note: {filename} does not exist");
            format!(
                "Note \"{}\" not found (looked for {filename})",
                request.title
            )
        }
    };
    Ok(text_result(text))
}
