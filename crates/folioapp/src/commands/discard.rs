use crate::collection::Outcome;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::ContentBackend;
use crate::workflow::EditorWorkflow;

/// Drops all unsaved changes.
///
/// Without `skip_confirm` nothing is dropped; the result lists what would be
/// lost so the caller can ask.
pub fn run<B: ContentBackend>(
    workflow: &mut EditorWorkflow<B>,
    skip_confirm: bool,
) -> Result<CmdResult> {
    if !workflow.can_discard() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No changes to discard")));
    }

    if !skip_confirm {
        let sections: Vec<String> = workflow
            .store()
            .changed_sections()
            .iter()
            .map(|s| s.to_string())
            .collect();
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "This drops unsaved changes to: {}. Re-run with --yes to confirm.",
            sections.join(", ")
        ))));
    }

    let mut result = CmdResult::default();
    if workflow.discard() == Outcome::Applied {
        if let Some(notice) = workflow.notice() {
            result.add_message(notice.into());
        }
    }
    Ok(result)
}
