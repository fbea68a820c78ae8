//! # Collection Entry Commands
//!
//! Add, edit and remove entries of the four identity-keyed collections.
//!
//! Entries are addressed with an [`EntrySelector`]. Positions are resolved to
//! ids against the working copy before anything is edited, so the operation
//! itself is always identity-based. A selector that matches nothing is
//! reported as a warning and leaves the document alone.

use crate::collection::{CollectionKind, EntryEdit, Outcome};
use crate::commands::helpers::{not_found, resolve_entry, EntrySelector};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::ContentBackend;
use crate::workflow::EditorWorkflow;

/// Appends a new entry built from the kind's template and `edit`.
pub fn add<B: ContentBackend>(
    workflow: &mut EditorWorkflow<B>,
    edit: &EntryEdit,
) -> Result<CmdResult> {
    let mut created = None;
    workflow.edit(|doc| {
        let (next, id) = edit.add_to(doc);
        created = Some(id);
        Some(next)
    });

    let mut result = CmdResult::default();
    if let Some(id) = created {
        result.add_message(CmdMessage::success(format!(
            "Added {} {}",
            edit.kind(),
            id
        )));
        result = result.with_created_id(id);
    }
    Ok(result)
}

pub fn edit<B: ContentBackend>(
    workflow: &mut EditorWorkflow<B>,
    selector: &EntrySelector,
    edit: &EntryEdit,
) -> Result<CmdResult> {
    let kind = edit.kind();
    let Some(id) = resolve_entry(workflow.document(), kind, selector) else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(not_found(kind, selector))));
    };

    let message = match workflow.edit(|doc| edit.apply_to(doc, &id)) {
        Outcome::Applied => CmdMessage::success(format!("Updated {} {}", kind, id)),
        Outcome::NoOp => CmdMessage::info(format!("{} {} already has those values", kind, id)),
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn remove<B: ContentBackend>(
    workflow: &mut EditorWorkflow<B>,
    kind: CollectionKind,
    selector: &EntrySelector,
) -> Result<CmdResult> {
    let Some(id) = resolve_entry(workflow.document(), kind, selector) else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(not_found(kind, selector))));
    };

    let message = match workflow.edit(|doc| kind.delete(doc, &id)) {
        Outcome::Applied => CmdMessage::success(format!("Removed {} {}", kind, id)),
        Outcome::NoOp => CmdMessage::warning(not_found(kind, selector)),
    };
    Ok(CmdResult::default().with_message(message))
}
