use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContentDocument;
use crate::store::backend::ContentBackend;

/// Writes starter content when the sink holds nothing yet.
///
/// This bootstraps a site and never overwrites: existing content is left as
/// it is, whatever the environment.
pub fn run<B: ContentBackend>(backend: &B) -> Result<CmdResult> {
    if backend.read()?.is_some() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Content already exists at {}",
            backend.location()
        ))));
    }

    backend.write(&ContentDocument::starter())?;
    tracing::info!(location = %backend.location(), "starter content written");
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Created starter content at {}",
        backend.location()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn test_init_writes_starter_once() {
        let backend = MemBackend::new();
        run(&backend).unwrap();
        assert_eq!(backend.write_attempts(), 1);
        assert_eq!(
            backend.read().unwrap().unwrap().name,
            ContentDocument::starter().name
        );

        let res = run(&backend).unwrap();
        assert!(res.messages[0].content.starts_with("Content already exists"));
        assert_eq!(backend.write_attempts(), 1);
    }
}
