use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::SessionGate;
use crate::store::backend::ContentBackend;
use crate::workflow::EditorWorkflow;

pub fn login(gate: &mut SessionGate, credential: &str) -> Result<CmdResult> {
    let message = if gate.login(credential) {
        CmdMessage::success("Logged in")
    } else {
        CmdMessage::error("Incorrect password")
    };
    Ok(CmdResult::default().with_message(message))
}

/// Closes the session. Unsaved edits do not outlive it.
pub fn logout<B: ContentBackend>(
    gate: &mut SessionGate,
    workflow: &mut EditorWorkflow<B>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !gate.is_open() {
        result.add_message(CmdMessage::info("Not logged in"));
        return Ok(result);
    }

    if workflow.is_dirty() {
        workflow.discard();
        result.add_message(CmdMessage::warning("Unsaved changes were dropped"));
    }
    gate.logout();
    result.add_message(CmdMessage::success("Logged out"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{fields, MessageLevel};
    use crate::gateway::Environment;
    use crate::model::TextField;
    use crate::session::SessionState;
    use crate::test_utils::{mem_workflow, open_gate, sample_document, TEST_PASSWORD};

    #[test]
    fn test_login() {
        let mut gate = SessionGate::new(TEST_PASSWORD, SessionState::default());
        let res = login(&mut gate, "wrong").unwrap();
        assert!(res.has_errors());
        assert!(!gate.is_open());

        let res = login(&mut gate, TEST_PASSWORD).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Success);
        assert!(gate.is_open());
    }

    #[test]
    fn test_logout_drops_unsaved_edits() {
        let mut gate = open_gate();
        let mut wf = mem_workflow(Environment::Development);
        fields::set_text(&mut wf, TextField::Name, "Mallory").unwrap();

        let res = logout(&mut gate, &mut wf).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Warning);
        assert!(!gate.is_open());
        assert_eq!(wf.document(), &sample_document());
    }

    #[test]
    fn test_logout_when_closed() {
        let mut gate = SessionGate::new(TEST_PASSWORD, SessionState::default());
        let mut wf = mem_workflow(Environment::Development);
        let res = logout(&mut gate, &mut wf).unwrap();
        assert_eq!(res.messages[0].content, "Not logged in");
    }
}
