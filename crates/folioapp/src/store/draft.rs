use super::write_atomic;
use crate::error::{FolioError, Result};
use crate::model::ContentDocument;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const DRAFT_FILENAME: &str = "draft.json";

/// Unsaved working copy kept between CLI invocations.
///
/// Lives in the session directory and shares the session's lifetime: logout
/// removes it. It is never a save target.
pub struct DraftFile {
    path: PathBuf,
}

impl DraftFile {
    pub fn in_dir(session_dir: &Path) -> Self {
        Self {
            path: session_dir.join(DRAFT_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<ContentDocument>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(FolioError::Io)?;
        let doc = serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        Ok(Some(doc))
    }

    pub fn save(&self, doc: &ContentDocument) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| FolioError::Store("draft path has no parent".to_string()))?;
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(FolioError::Io)?;
        }
        let content = serde_json::to_string_pretty(doc).map_err(FolioError::Serialization)?;
        let tmp = dir.join(format!(".draft-{}.tmp", Uuid::new_v4()));
        write_atomic(&tmp, &self.path, &content)
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(FolioError::Io)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_load_clear() {
        let temp = tempdir().unwrap();
        let draft = DraftFile::in_dir(&temp.path().join(".folio"));
        assert!(draft.load().unwrap().is_none());

        let doc = ContentDocument {
            name: "Draft".into(),
            ..Default::default()
        };
        draft.save(&doc).unwrap();
        assert_eq!(draft.load().unwrap(), Some(doc));

        draft.clear().unwrap();
        assert!(draft.load().unwrap().is_none());
        draft.clear().unwrap();
    }

    #[test]
    fn failed_save_cleans_up() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".folio");
        // A directory where the draft file should go makes the rename fail.
        fs::create_dir_all(dir.join(DRAFT_FILENAME).join("child")).unwrap();
        let draft = DraftFile::in_dir(&dir);

        assert!(draft.save(&ContentDocument::default()).is_err());
        let leftovers: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "leftover temp files: {:?}", leftovers);
    }
}
