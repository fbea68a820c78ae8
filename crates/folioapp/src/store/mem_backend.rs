use super::backend::ContentBackend;
use crate::error::{FolioError, Result};
use crate::model::ContentDocument;
use std::cell::{Cell, RefCell};

/// In-memory content sink for testing.
///
/// Stores the serialized payload, exactly as a real sink would receive it.
/// Uses `RefCell`/`Cell` since an editing session is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    payload: RefCell<Option<String>>,
    fail_with: RefCell<Option<String>>,
    write_attempts: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `doc`.
    pub fn with_document(doc: &ContentDocument) -> Self {
        let backend = Self::new();
        *backend.payload.borrow_mut() = serde_json::to_string(doc).ok();
        backend
    }

    /// Make every subsequent write fail with `reason`; `None` restores writes.
    pub fn set_failure(&self, reason: Option<&str>) {
        *self.fail_with.borrow_mut() = reason.map(str::to_string);
    }

    /// Number of writes attempted, failed ones included.
    pub fn write_attempts(&self) -> usize {
        self.write_attempts.get()
    }

    /// The last payload successfully written, if any.
    pub fn payload(&self) -> Option<String> {
        self.payload.borrow().clone()
    }
}

impl ContentBackend for MemBackend {
    fn read(&self) -> Result<Option<ContentDocument>> {
        match self.payload.borrow().as_deref() {
            Some(text) => Ok(Some(
                serde_json::from_str(text).map_err(FolioError::Serialization)?,
            )),
            None => Ok(None),
        }
    }

    fn write(&self, doc: &ContentDocument) -> Result<()> {
        self.write_attempts.set(self.write_attempts.get() + 1);
        if let Some(reason) = self.fail_with.borrow().as_ref() {
            return Err(FolioError::Store(reason.clone()));
        }
        let text = serde_json::to_string(doc).map_err(FolioError::Serialization)?;
        *self.payload.borrow_mut() = Some(text);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://portfolio.json".to_string()
    }
}
