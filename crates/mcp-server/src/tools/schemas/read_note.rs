use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ReadNoteRequest {
    /// The title of the note to read
    #[schemars(description = "The title of the note to read")]
    pub title: String,
}
