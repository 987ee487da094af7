use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SaveNoteRequest {
    /// The title of the note
    #[schemars(description = "The title of the note")]
    pub title: String,

    /// The markdown content of the note
    #[schemars(description = "The markdown content of the note")]
    pub content: String,
}
