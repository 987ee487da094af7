use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::NoteStoreConfig;
use crate::error::{NoteStoreError, Result};
use crate::slug::{render_note, title_to_filename, NOTE_EXTENSION};

/// Result of looking a note up by title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Full file content as stored (header included).
    Found(String),
    /// No file exists for the title; carries the file name that was tried.
    NotFound { filename: String },
}

/// Markdown notes kept as flat files in one directory.
///
/// Holds no open handles: every operation re-creates the directory if needed and then
/// touches exactly one file (or one directory listing).
#[derive(Debug, Clone)]
pub struct NoteStore {
    config: NoteStoreConfig,
}

impl NoteStore {
    pub fn new(config: NoteStoreConfig) -> Self {
        Self { config }
    }

    pub fn notes_dir(&self) -> &Path {
        &self.config.notes_dir
    }

    /// Create the notes directory (and parents). Succeeds if it already exists.
    pub async fn ensure_directory(&self) -> Result<()> {
        let dir = self.notes_dir();
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| NoteStoreError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })
    }

    /// Write `title`'s note, replacing any existing file. Returns the file name used.
    pub async fn save(&self, title: &str, body: &str) -> Result<String> {
        let filename = title_to_filename(title);
        let path = self.note_path(&filename)?;
        self.ensure_directory().await?;

        tokio::fs::write(&path, render_note(title, body))
            .await
            .map_err(|source| NoteStoreError::Write {
                path: path.clone(),
                source,
            })?;
        log::debug!("Saved note {}", path.display());
        Ok(filename)
    }

    /// File names of every `.md` entry in the notes directory, in directory order.
    pub async fn list(&self) -> Result<Vec<String>> {
        self.ensure_directory().await?;

        let dir = self.notes_dir();
        let list_err = |source: std::io::Error| NoteStoreError::List {
            path: dir.to_path_buf(),
            source,
        };
        let mut entries = tokio::fs::read_dir(dir).await.map_err(list_err)?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
            let Ok(name) = entry.file_name().into_string() else {
                log::debug!("Skipping non UTF-8 entry {:?}", entry.path());
                continue;
            };
            if name.ends_with(NOTE_EXTENSION) {
                names.push(name);
            }
        }
        Ok(names)
    }

    /// Content of `title`'s note, or [`ReadOutcome::NotFound`] when no such file exists.
    pub async fn read(&self, title: &str) -> Result<ReadOutcome> {
        let filename = title_to_filename(title);
        let path = self.note_path(&filename)?;
        self.ensure_directory().await?;

        // Mis-encoded notes are still notes: invalid UTF-8 decodes to U+FFFD.
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(ReadOutcome::Found(
                String::from_utf8_lossy(&bytes).into_owned(),
            )),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Ok(ReadOutcome::NotFound { filename })
            }
            Err(source) => Err(NoteStoreError::Read { path, source }),
        }
    }

    fn note_path(&self, filename: &str) -> Result<PathBuf> {
        if filename.contains(['/', '\\', '\0']) {
            return Err(NoteStoreError::UnsafeFilename(filename.to_string()));
        }
        Ok(self.notes_dir().join(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn store_in(dir: &Path) -> NoteStore {
        NoteStore::new(NoteStoreConfig::new(dir.join("dev-notes")))
    }

    #[tokio::test]
    async fn save_then_read_round_trips() {
        let tmp = tempdir().expect("tempdir");
        let store = store_in(tmp.path());

        let filename = store.save("Test Note", "hello").await.unwrap();
        assert_eq!(filename, "test-note.md");
        assert_eq!(
            store.read("Test Note").await.unwrap(),
            ReadOutcome::Found("# Test Note\n\nhello\n".to_string())
        );
        assert_eq!(
            std::fs::read_to_string(store.notes_dir().join("test-note.md")).unwrap(),
            "# Test Note\n\nhello\n"
        );
    }

    #[tokio::test]
    async fn ensure_directory_is_idempotent_and_recursive() {
        let tmp = tempdir().expect("tempdir");
        let store = NoteStore::new(NoteStoreConfig::new(tmp.path().join("a").join("b")));

        store.ensure_directory().await.unwrap();
        store.ensure_directory().await.unwrap();
        assert!(store.notes_dir().is_dir());

        let children: Vec<_> = std::fs::read_dir(tmp.path().join("a"))
            .unwrap()
            .collect::<std::io::Result<_>>()
            .unwrap();
        assert_eq!(children.len(), 1);
    }

    #[tokio::test]
    async fn save_overwrites_existing_note() {
        let tmp = tempdir().expect("tempdir");
        let store = store_in(tmp.path());

        store.save("X", "a").await.unwrap();
        store.save("X", "b").await.unwrap();

        let ReadOutcome::Found(content) = store.read("X").await.unwrap() else {
            panic!("note X should exist");
        };
        assert_eq!(content, "# X\n\nb\n");
        assert!(!content.contains('a'));
    }

    #[tokio::test]
    async fn colliding_titles_last_writer_wins() {
        let tmp = tempdir().expect("tempdir");
        let store = store_in(tmp.path());

        assert_eq!(store.save("Foo Bar", "first").await.unwrap(), "foo-bar.md");
        assert_eq!(store.save("foo   BAR", "second").await.unwrap(), "foo-bar.md");

        assert_eq!(
            store.read("Foo Bar").await.unwrap(),
            ReadOutcome::Found("# foo   BAR\n\nsecond\n".to_string())
        );
        assert_eq!(store.list().await.unwrap(), vec!["foo-bar.md".to_string()]);
    }

    #[tokio::test]
    async fn read_missing_note_reports_attempted_filename() {
        let tmp = tempdir().expect("tempdir");
        let store = store_in(tmp.path());

        assert_eq!(
            store.read("Never Saved").await.unwrap(),
            ReadOutcome::NotFound {
                filename: "never-saved.md".to_string()
            }
        );
        // Reading still ensures the directory exists.
        assert!(store.notes_dir().is_dir());
    }

    #[tokio::test]
    async fn read_other_io_failures_are_errors() {
        let tmp = tempdir().expect("tempdir");
        let store = store_in(tmp.path());
        store.ensure_directory().await.unwrap();
        std::fs::create_dir(store.notes_dir().join("folder.md")).unwrap();

        let err = store.read("Folder").await.unwrap_err();
        assert!(matches!(err, NoteStoreError::Read { .. }), "{err:?}");
        assert!(err.is_io());
        assert_eq!(err.path(), Some(&store.notes_dir().join("folder.md")));
    }

    #[tokio::test]
    async fn read_decodes_invalid_utf8_lossily() {
        let tmp = tempdir().expect("tempdir");
        let store = store_in(tmp.path());
        store.ensure_directory().await.unwrap();
        std::fs::write(store.notes_dir().join("latin.md"), b"# Latin\n\ncaf\xe9\n").unwrap();

        assert_eq!(
            store.read("Latin").await.unwrap(),
            ReadOutcome::Found("# Latin\n\ncaf\u{FFFD}\n".to_string())
        );
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn list_skips_non_utf8_entries() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempdir().expect("tempdir");
        let store = store_in(tmp.path());
        store.save("Alpha", "one").await.unwrap();
        std::fs::write(
            store.notes_dir().join(OsStr::from_bytes(b"\xff.md")),
            "unreadable name",
        )
        .unwrap();

        assert_eq!(store.list().await.unwrap(), vec!["alpha.md".to_string()]);
    }

    #[tokio::test]
    async fn list_only_reports_markdown_files() {
        let tmp = tempdir().expect("tempdir");
        let store = store_in(tmp.path());

        assert!(store.list().await.unwrap().is_empty());

        store.save("Alpha", "one").await.unwrap();
        store.save("Beta", "two").await.unwrap();
        std::fs::write(store.notes_dir().join("scratch.txt"), "ignored").unwrap();
        std::fs::write(store.notes_dir().join("README"), "ignored").unwrap();

        let mut names = store.list().await.unwrap();
        names.sort();
        assert_eq!(names, vec!["alpha.md".to_string(), "beta.md".to_string()]);
    }

    #[tokio::test]
    async fn titles_with_path_separators_are_rejected() {
        let tmp = tempdir().expect("tempdir");
        let store = store_in(tmp.path());

        for title in ["../escape", "a/b", "dir\\file"] {
            let err = store.save(title, "x").await.unwrap_err();
            assert!(matches!(err, NoteStoreError::UnsafeFilename(_)), "{err:?}");
            assert!(!err.is_io());

            let err = store.read(title).await.unwrap_err();
            assert!(matches!(err, NoteStoreError::UnsafeFilename(_)), "{err:?}");
        }
        assert!(!tmp.path().join("escape.md").exists());
    }

    #[tokio::test]
    async fn directory_creation_failure_surfaces_as_error() {
        let tmp = tempdir().expect("tempdir");
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();
        let store = NoteStore::new(NoteStoreConfig::new(blocker.join("notes")));

        let err = store.save("Any", "x").await.unwrap_err();
        assert!(matches!(err, NoteStoreError::CreateDir { .. }), "{err:?}");
        assert!(matches!(
            store.list().await.unwrap_err(),
            NoteStoreError::CreateDir { .. }
        ));
    }
}
