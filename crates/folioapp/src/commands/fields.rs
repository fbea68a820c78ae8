//! Single-valued fields: the header text, the about paragraph, resume text
//! and the four feature flags.

use crate::collection::{self, Outcome};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Flag, TextField};
use crate::store::backend::ContentBackend;
use crate::workflow::EditorWorkflow;

pub fn set_text<B: ContentBackend>(
    workflow: &mut EditorWorkflow<B>,
    field: TextField,
    value: &str,
) -> Result<CmdResult> {
    let outcome = workflow.edit(|doc| collection::set_text(doc, field, value));
    let message = match outcome {
        Outcome::Applied => CmdMessage::success(format!("Updated {}", field)),
        Outcome::NoOp => CmdMessage::info(format!("{} already has that value", field)),
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn set_flag<B: ContentBackend>(
    workflow: &mut EditorWorkflow<B>,
    flag: Flag,
    value: bool,
) -> Result<CmdResult> {
    let outcome = workflow.edit(|doc| collection::set_flag(doc, flag, value));
    let state = if value { "on" } else { "off" };
    let message = match outcome {
        Outcome::Applied => CmdMessage::success(format!("Turned {} {}", flag, state)),
        Outcome::NoOp => CmdMessage::info(format!("{} is already {}", flag, state)),
    };
    Ok(CmdResult::default().with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::gateway::Environment;
    use crate::test_utils::mem_workflow;
    use crate::workflow::EditorState;

    #[test]
    fn test_set_text_marks_dirty() {
        let mut wf = mem_workflow(Environment::Development);
        let res = set_text(&mut wf, TextField::TaglineTwo, "a maker").unwrap();

        assert_eq!(res.messages[0].level, MessageLevel::Success);
        assert_eq!(wf.document().header_tagline_two, "a maker");
        assert_eq!(wf.state(), EditorState::Dirty);
    }

    #[test]
    fn test_set_text_same_value_is_info() {
        let mut wf = mem_workflow(Environment::Development);
        let res = set_text(&mut wf, TextField::Name, "Alice").unwrap();

        assert_eq!(res.messages[0].level, MessageLevel::Info);
        assert_eq!(wf.state(), EditorState::Clean);
    }

    #[test]
    fn test_set_flag() {
        let mut wf = mem_workflow(Environment::Development);
        let res = set_flag(&mut wf, Flag::DarkMode, true).unwrap();
        assert!(res.messages[0].content.contains("dark-mode"));
        assert!(wf.document().dark_mode);

        let res = set_flag(&mut wf, Flag::ShowResume, true).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Info);
    }
}
