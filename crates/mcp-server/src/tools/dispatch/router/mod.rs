// Per-tool dispatch functions used by the MCP tool registry.

pub(super) mod error;
pub(super) mod list_notes;
pub(super) mod read_note;
pub(super) mod save_note;
mod tool_router;

pub(super) fn build_tool_registry() -> super::tool_registry::ToolRegistry<super::NotesService> {
    tool_router::build_tool_registry()
}
