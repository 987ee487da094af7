//! Notes MCP Server
//!
//! Lets an AI assistant keep markdown notes in a local directory via the MCP protocol.
//!
//! ## Tools
//!
//! - `save_note` - Save (or overwrite) a note by title
//! - `list_notes` - List saved note filenames
//! - `read_note` - Read a note by title
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "notes": {
//!       "command": "notes-mcp",
//!       "args": ["--notes-dir", "~/dev-notes"]
//!     }
//!   }
//! }
//! ```

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use notes_store::{NoteStore, NoteStoreConfig, NOTES_DIR_ENV};
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use std::path::PathBuf;

mod tools;

pub use tools::{ListNotesRequest, NotesService, ReadNoteRequest, SaveNoteRequest};

#[derive(Parser, Debug)]
#[command(name = "notes-mcp")]
#[command(about = "MCP server for saving, listing, and reading markdown notes", long_about = None)]
#[command(version)]
struct Cli {
    /// Notes directory (overrides NOTES_MCP_DIR; default: ~/dev-notes)
    #[arg(long, value_name = "DIR")]
    notes_dir: Option<PathBuf>,

    /// Enable debug logging (stderr)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn store_config(&self) -> NoteStoreConfig {
        match &self.notes_dir {
            Some(dir) => NoteStoreConfig::new(dir.clone()),
            None => NoteStoreConfig::from_env(),
        }
    }
}

fn init_logging(verbose: bool) {
    // stdout carries the MCP protocol; logs must stay on stderr.
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

pub async fn main_entry() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.store_config();
    log::info!(
        "Notes directory: {} (set --notes-dir or {NOTES_DIR_ENV} to change)",
        config.notes_dir.display()
    );

    let service = NotesService::new(NoteStore::new(config));
    let server = service
        .serve(stdio())
        .await
        .context("Failed to start MCP server on stdio")?;
    log::info!("Notes MCP server running on stdio");

    server.waiting().await?;

    log::info!("Notes MCP server stopped");
    Ok(())
}
