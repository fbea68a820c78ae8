//! # Storage Layer
//!
//! Two concerns live here:
//!
//! 1. **[`DocumentStore`]**: the in-memory working copy of the site content and
//!    the baseline it is compared against.
//! 2. **Backends**: where the content document is persisted. The
//!    [`backend::ContentBackend`] trait abstracts the sink so the gateway and
//!    the workflow never know whether they talk to a file or to memory.
//!
//! ## Baseline Discipline
//!
//! The baseline is the last document known to be on the sink (or the one
//! loaded at start). It is always an owned copy: nothing the editor does to
//! the working copy can reach it. Only two operations move it:
//! [`DocumentStore::commit_baseline`] and [`DocumentStore::commit_persisted`].
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: the `portfolio.json` file, written atomically.
//! - [`mem_backend::MemBackend`]: in-memory sink for tests, with failure injection.
//! - [`draft::DraftFile`]: the CLI's between-invocations working copy.
//!
//! ## Storage Layout
//!
//! ```text
//! <site root>/
//! ├── data/portfolio.json   # Content document (configurable)
//! └── .folio/
//!     ├── folio.toml        # Configuration
//!     ├── session.json      # Session gate flag
//!     ├── draft.json        # Unsaved working copy, if any
//!     └── outbox/           # Spooled contact messages
//! ```

use crate::diff;
use crate::error::{FolioError, Result};
use crate::model::ContentDocument;
use std::fs;
use std::path::Path;

pub mod backend;
pub mod draft;
pub mod fs_backend;
pub mod mem_backend;

/// Writes `content` to `tmp`, then renames it over `target`.
///
/// The temporary file is removed again when the rename fails.
pub(crate) fn write_atomic(tmp: &Path, target: &Path, content: &str) -> Result<()> {
    fs::write(tmp, content).map_err(FolioError::Io)?;
    if let Err(e) = fs::rename(tmp, target) {
        let _ = fs::remove_file(tmp);
        return Err(FolioError::Io(e));
    }
    Ok(())
}

/// Working document plus the baseline snapshot.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    current: ContentDocument,
    baseline: ContentDocument,
    revision: u64,
}

impl DocumentStore {
    pub fn new(initial: ContentDocument) -> Self {
        let mut store = Self::default();
        store.load(initial);
        store
    }

    /// Sets both the working copy and the baseline to `initial`.
    pub fn load(&mut self, initial: ContentDocument) {
        self.baseline = initial.clone();
        self.current = initial;
        self.revision += 1;
    }

    pub fn current(&self) -> &ContentDocument {
        &self.current
    }

    pub fn baseline(&self) -> &ContentDocument {
        &self.baseline
    }

    /// Bumped on every replacement of the working copy.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn replace(&mut self, doc: ContentDocument) {
        self.current = doc;
        self.revision += 1;
    }

    /// Discards the working copy in favour of the baseline.
    pub fn reset_to_baseline(&mut self) {
        self.current = self.baseline.clone();
        self.revision += 1;
    }

    /// Makes the working copy the new baseline.
    pub fn commit_baseline(&mut self) {
        self.baseline = self.current.clone();
    }

    /// Makes `persisted` the new baseline, leaving the working copy alone.
    pub fn commit_persisted(&mut self, persisted: ContentDocument) {
        self.baseline = persisted;
    }

    pub fn is_dirty(&self) -> bool {
        diff::is_dirty(&self.current, &self.baseline)
    }

    pub fn changed_sections(&self) -> Vec<diff::Section> {
        diff::changed_sections(&self.current, &self.baseline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> ContentDocument {
        ContentDocument {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn load_sets_both_copies() {
        let store = DocumentStore::new(named("Alice"));
        assert_eq!(store.current(), store.baseline());
        assert!(!store.is_dirty());
    }

    #[test]
    fn replace_leaves_baseline() {
        let mut store = DocumentStore::new(named("Alice"));
        store.replace(named("Bob"));
        assert_eq!(store.baseline().name, "Alice");
        assert_eq!(store.current().name, "Bob");
        assert!(store.is_dirty());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut store = DocumentStore::new(named("Alice"));
        store.replace(named("Bob"));

        store.reset_to_baseline();
        let once = store.current().clone();
        assert!(!store.is_dirty());

        store.reset_to_baseline();
        assert_eq!(store.current(), &once);
        assert!(!store.is_dirty());
    }

    #[test]
    fn commit_clears_dirty_and_detaches_baseline() {
        let mut store = DocumentStore::new(named("Alice"));
        store.replace(named("Bob"));
        store.commit_baseline();
        assert!(!store.is_dirty());

        store.replace(named("Carol"));
        assert_eq!(store.baseline().name, "Bob");
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("occupied");
        fs::create_dir_all(target.join("child")).unwrap();
        let tmp = temp.path().join(".occupied.tmp");

        assert!(write_atomic(&tmp, &target, "{}").is_err());
        assert!(!tmp.exists());
        assert!(target.is_dir());
    }

    #[test]
    fn revision_tracks_replacements() {
        let mut store = DocumentStore::new(named("Alice"));
        let start = store.revision();
        store.replace(named("Bob"));
        store.reset_to_baseline();
        assert_eq!(store.revision(), start + 2);
    }
}
