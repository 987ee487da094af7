use std::env;
use std::path::PathBuf;

/// Environment override for the notes directory.
pub const NOTES_DIR_ENV: &str = "NOTES_MCP_DIR";

/// Directory name used under the home directory when nothing is configured.
pub const DEFAULT_NOTES_DIR_NAME: &str = "dev-notes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteStoreConfig {
    /// Directory holding one `.md` file per note.
    pub notes_dir: PathBuf,
}

impl NoteStoreConfig {
    pub fn new(notes_dir: impl Into<PathBuf>) -> Self {
        Self {
            notes_dir: expand_home(notes_dir.into()),
        }
    }

    /// `NOTES_MCP_DIR` if set, otherwise `~/dev-notes` (or `./dev-notes` without a home dir).
    pub fn from_env() -> Self {
        match env_notes_dir() {
            Some(dir) => Self::new(dir),
            None => Self::default(),
        }
    }
}

impl Default for NoteStoreConfig {
    fn default() -> Self {
        let base = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            notes_dir: base.join(DEFAULT_NOTES_DIR_NAME),
        }
    }
}

fn env_notes_dir() -> Option<PathBuf> {
    let value = env::var(NOTES_DIR_ENV).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

fn expand_home(path: PathBuf) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path;
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path,
    }
}
