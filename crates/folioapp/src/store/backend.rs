use crate::error::Result;
use crate::model::ContentDocument;

/// Abstract interface for the content sink.
///
/// The gateway decides *whether* a write may happen; a backend only knows
/// *how*. Writes are always whole-document.
pub trait ContentBackend {
    /// Read the persisted document. Returns Ok(None) if nothing has been written yet.
    fn read(&self) -> Result<Option<ContentDocument>>;

    /// Replace the persisted document.
    /// MUST be atomic: a failed write leaves the previous document intact.
    fn write(&self, doc: &ContentDocument) -> Result<()>;

    /// Human-readable location, for messages.
    fn location(&self) -> String;
}
