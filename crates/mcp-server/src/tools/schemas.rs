// Tool input schemas. Field docs double as the JSON schema descriptions shown to clients.

pub(crate) mod list_notes;
pub(crate) mod read_note;
pub(crate) mod save_note;
