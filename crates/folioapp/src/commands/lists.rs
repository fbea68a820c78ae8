//! Languages, frameworks and others: plain string lists addressed by
//! 1-based position.

use crate::collection::{ListKind, Outcome, LIST_PLACEHOLDER};
use crate::commands::helpers::list_index;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::ContentBackend;
use crate::workflow::EditorWorkflow;

/// Appends `value`, or the placeholder when none is given.
pub fn add<B: ContentBackend>(
    workflow: &mut EditorWorkflow<B>,
    kind: ListKind,
    value: Option<&str>,
) -> Result<CmdResult> {
    workflow.edit(|doc| Some(kind.add(doc, value)));
    let position = kind.items(workflow.document()).len();
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Added {} {} \"{}\"",
        kind,
        position,
        value.unwrap_or(LIST_PLACEHOLDER)
    ))))
}

pub fn edit<B: ContentBackend>(
    workflow: &mut EditorWorkflow<B>,
    kind: ListKind,
    position: usize,
    value: &str,
) -> Result<CmdResult> {
    let index = list_index(position)?;
    let message = match workflow.edit(|doc| kind.edit(doc, index, value)) {
        Outcome::Applied => CmdMessage::success(format!("Updated {} {}", kind, position)),
        Outcome::NoOp if index < kind.items(workflow.document()).len() => {
            CmdMessage::info(format!("{} {} is already \"{}\"", kind, position, value))
        }
        Outcome::NoOp => out_of_range(workflow, kind, position),
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn remove<B: ContentBackend>(
    workflow: &mut EditorWorkflow<B>,
    kind: ListKind,
    position: usize,
) -> Result<CmdResult> {
    let index = list_index(position)?;
    let message = match workflow.edit(|doc| kind.remove(doc, index)) {
        Outcome::Applied => CmdMessage::success(format!("Removed {} {}", kind, position)),
        Outcome::NoOp => out_of_range(workflow, kind, position),
    };
    Ok(CmdResult::default().with_message(message))
}

fn out_of_range<B: ContentBackend>(
    workflow: &EditorWorkflow<B>,
    kind: ListKind,
    position: usize,
) -> CmdMessage {
    let len = kind.items(workflow.document()).len();
    CmdMessage::warning(format!(
        "No {} at position {} (list has {}); nothing changed",
        kind, position, len
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::FolioError;
    use crate::gateway::Environment;
    use crate::test_utils::mem_workflow;
    use crate::workflow::EditorState;

    #[test]
    fn test_add_placeholder_and_value() {
        let mut wf = mem_workflow(Environment::Development);
        add(&mut wf, ListKind::Frameworks, None).unwrap();
        add(&mut wf, ListKind::Frameworks, Some("Axum")).unwrap();
        assert_eq!(wf.document().resume.frameworks, vec!["Added", "Axum"]);
        assert_eq!(wf.state(), EditorState::Dirty);
    }

    #[test]
    fn test_edit_and_remove_by_position() {
        let mut wf = mem_workflow(Environment::Development);
        edit(&mut wf, ListKind::Languages, 2, "Zig").unwrap();
        assert_eq!(wf.document().resume.languages, vec!["Rust", "Zig"]);

        remove(&mut wf, ListKind::Languages, 1).unwrap();
        assert_eq!(wf.document().resume.languages, vec!["Zig"]);
    }

    #[test]
    fn test_edit_to_same_value_is_info() {
        let mut wf = mem_workflow(Environment::Development);
        let res = edit(&mut wf, ListKind::Languages, 1, "Rust").unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Info);
        assert_eq!(wf.state(), EditorState::Clean);

        let res = edit(&mut wf, ListKind::Languages, 5, "Rust").unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn test_out_of_range_warns() {
        let mut wf = mem_workflow(Environment::Development);
        let res = remove(&mut wf, ListKind::Languages, 3).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Warning);
        assert!(res.messages[0].content.contains("list has 2"));
        assert_eq!(wf.state(), EditorState::Clean);
    }

    #[test]
    fn test_position_zero_is_rejected() {
        let mut wf = mem_workflow(Environment::Development);
        assert!(matches!(
            edit(&mut wf, ListKind::Others, 0, "x"),
            Err(FolioError::Validation(_))
        ));
    }
}
