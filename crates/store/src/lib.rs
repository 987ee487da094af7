//! # Notes Store
//!
//! Flat-file markdown note storage.
//!
//! Each note lives in a single `.md` file inside one notes directory. The file name is
//! derived from the note title by [`title_to_filename`], and the file body is the title as
//! an H1 header followed by the note content.
//!
//! ```text
//! "My First Note" ──> my-first-note.md
//!                     ┌──────────────────┐
//!                     │ # My First Note  │
//!                     │                  │
//!                     │ <content>        │
//!                     └──────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use notes_store::{NoteStore, NoteStoreConfig, ReadOutcome};
//!
//! #[tokio::main]
//! async fn main() -> notes_store::Result<()> {
//!     let store = NoteStore::new(NoteStoreConfig::new("/tmp/dev-notes"));
//!     let filename = store.save("Test Note", "hello").await?;
//!     assert_eq!(filename, "test-note.md");
//!
//!     if let ReadOutcome::Found(content) = store.read("Test Note").await? {
//!         print!("{content}");
//!     }
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod slug;
mod store;

pub use config::{NoteStoreConfig, DEFAULT_NOTES_DIR_NAME, NOTES_DIR_ENV};
pub use error::{NoteStoreError, Result};
pub use slug::{render_note, title_to_filename, NOTE_EXTENSION};
pub use store::{NoteStore, ReadOutcome};
