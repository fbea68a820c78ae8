use super::backend::ContentBackend;
use super::write_atomic;
use crate::error::{FolioError, Result};
use crate::model::ContentDocument;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// The content document as a JSON file on disk.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<PathBuf> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !parent.exists() {
            fs::create_dir_all(&parent).map_err(FolioError::Io)?;
        }
        Ok(parent)
    }
}

impl ContentBackend for FsBackend {
    fn read(&self) -> Result<Option<ContentDocument>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(FolioError::Io)?;
        let doc: ContentDocument =
            serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        Ok(Some(doc))
    }

    fn write(&self, doc: &ContentDocument) -> Result<()> {
        let parent = self.ensure_parent()?;
        let content = serde_json::to_string_pretty(doc).map_err(FolioError::Serialization)?;

        // Atomic write
        let tmp_path = parent.join(format!(".portfolio-{}.tmp", Uuid::new_v4()));
        write_atomic(&tmp_path, &self.path, &content)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
