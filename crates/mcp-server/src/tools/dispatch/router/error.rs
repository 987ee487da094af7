use super::super::McpError;
use notes_store::NoteStoreError;
use serde_json::json;

/// Map a store failure onto the protocol error taxonomy.
///
/// Rejected titles are invalid arguments; every other failure is an I/O failure surfaced as
/// an internal error so the caller can retry or alert.
pub(in crate::tools::dispatch) fn store_error(tool: &str, err: NoteStoreError) -> McpError {
    if !err.is_io() {
        return McpError::invalid_params(
            err.to_string(),
            Some(json!({
                "code": "unsafe_filename",
                "tool": tool,
            })),
        );
    }

    log::warn!("{tool} failed: {err}");
    let path = err.path().map(|p| p.display().to_string());
    McpError::internal_error(
        err.to_string(),
        Some(json!({
            "code": "io_failure",
            "tool": tool,
            "path": path,
        })),
    )
}
