use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::ContentBackend;
use crate::workflow::{EditorWorkflow, SaveOutcome};

/// Persists the working copy.
///
/// A refused or failed save is not an `Err`: the session is still valid and
/// the failure is reported as an error message carrying the notice text.
pub fn run<B: ContentBackend>(workflow: &mut EditorWorkflow<B>) -> Result<CmdResult> {
    let outcome = workflow.save();
    let mut result = CmdResult::default();

    match outcome {
        SaveOutcome::Skipped => {
            result.add_message(CmdMessage::info("No changes to save"));
        }
        SaveOutcome::Saved { still_dirty } => {
            if let Some(notice) = workflow.notice() {
                result.add_message(notice.into());
            }
            if still_dirty {
                result.add_message(CmdMessage::warning(
                    "Some edits arrived while saving and are still unsaved",
                ));
            }
        }
        SaveOutcome::Failed(_) => {
            if let Some(notice) = workflow.notice() {
                result.add_message(notice.into());
            }
        }
    }
    Ok(result)
}
