use rmcp::schemars;
use serde::Deserialize;

/// `list_notes` takes no inputs.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListNotesRequest {}
