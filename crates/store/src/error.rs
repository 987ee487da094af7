use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NoteStoreError>;

#[derive(Error, Debug)]
pub enum NoteStoreError {
    #[error("Failed to create notes directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write note {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list notes in {}: {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read note {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsafe note filename '{0}': titles must not contain path separators")]
    UnsafeFilename(String),
}

impl NoteStoreError {
    /// Filesystem path the failed operation touched, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::CreateDir { path, .. }
            | Self::Write { path, .. }
            | Self::List { path, .. }
            | Self::Read { path, .. } => Some(path),
            Self::UnsafeFilename(_) => None,
        }
    }

    /// True for unexpected filesystem failures (as opposed to rejected input).
    pub fn is_io(&self) -> bool {
        !matches!(self, Self::UnsafeFilename(_))
    }
}
