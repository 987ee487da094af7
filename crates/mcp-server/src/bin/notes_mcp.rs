use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    notes_mcp::main_entry().await
}
