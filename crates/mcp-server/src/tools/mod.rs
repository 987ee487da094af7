//! Notes MCP tool surface.
//!
//! Schemas, dispatch, and per-tool handlers live in separate submodules.

pub(crate) mod catalog;
mod dispatch;
mod schemas;

pub use dispatch::NotesService;
pub use schemas::list_notes::ListNotesRequest;
pub use schemas::read_note::ReadNoteRequest;
pub use schemas::save_note::SaveNoteRequest;
