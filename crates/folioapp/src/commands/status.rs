use crate::commands::{CmdResult, StatusReport};
use crate::error::Result;
use crate::session::SessionGate;
use crate::store::backend::ContentBackend;
use crate::workflow::EditorWorkflow;

pub fn run<B: ContentBackend>(workflow: &EditorWorkflow<B>, gate: &SessionGate) -> Result<CmdResult> {
    let report = StatusReport {
        state: workflow.state(),
        dirty: workflow.is_dirty(),
        authenticated: gate.is_open(),
        environment: workflow.gateway().environment(),
        changed_sections: workflow.store().changed_sections(),
    };
    Ok(CmdResult::default().with_status(report))
}
