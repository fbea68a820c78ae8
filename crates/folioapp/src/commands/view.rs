use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::backend::ContentBackend;
use crate::workflow::EditorWorkflow;

/// The working copy, unsaved edits included.
pub fn run<B: ContentBackend>(workflow: &EditorWorkflow<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_document(workflow.document().clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fields;
    use crate::gateway::Environment;
    use crate::model::TextField;
    use crate::test_utils::mem_workflow;

    #[test]
    fn test_view_shows_unsaved_edits() {
        let mut wf = mem_workflow(Environment::Production);
        fields::set_text(&mut wf, TextField::Logo, "AB").unwrap();

        let doc = run(&wf).unwrap().document.unwrap();
        assert_eq!(doc.logo, "AB");
        assert_eq!(wf.baseline().logo, "");
    }
}
