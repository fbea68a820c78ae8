//! # API Facade
//!
//! The single entry point for folio operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Gates** editing operations behind the session
//! - **Normalizes inputs** (parsing `#2`-style selectors)
//! - **Dispatches** to the matching function in [`crate::commands`]
//!
//! It holds no business logic and does no terminal I/O.
//!
//! ## Gated and Open Operations
//!
//! Anything that changes the working copy, saves or discards requires an
//! open session and fails with
//! [`FolioError::Unauthorized`](crate::error::FolioError::Unauthorized) otherwise.
//! Viewing, status, login/logout and the contact form are open to anyone.
//!
//! ## Generic Over the Backend
//!
//! `FolioApi<B: ContentBackend>` runs on
//! [`FsBackend`](crate::store::fs_backend::FsBackend) in the CLI and on
//! [`MemBackend`](crate::store::mem_backend::MemBackend) in tests.

use crate::collection::{CollectionKind, EntryEdit, ListKind};
use crate::commands::{self, helpers::EntrySelector, CmdResult};
use crate::contact::{ContactSubmission, MailSettings, NotificationSender};
use crate::error::Result;
use crate::model::{Flag, TextField};
use crate::session::SessionGate;
use crate::store::backend::ContentBackend;
use crate::workflow::EditorWorkflow;

pub struct FolioApi<B: ContentBackend> {
    workflow: EditorWorkflow<B>,
    gate: SessionGate,
}

impl<B: ContentBackend> FolioApi<B> {
    pub fn new(workflow: EditorWorkflow<B>, gate: SessionGate) -> Self {
        Self { workflow, gate }
    }

    pub fn workflow(&self) -> &EditorWorkflow<B> {
        &self.workflow
    }

    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    pub fn login(&mut self, credential: &str) -> Result<CmdResult> {
        commands::session::login(&mut self.gate, credential)
    }

    pub fn logout(&mut self) -> Result<CmdResult> {
        commands::session::logout(&mut self.gate, &mut self.workflow)
    }

    pub fn show(&self) -> Result<CmdResult> {
        commands::view::run(&self.workflow)
    }

    pub fn status(&self) -> Result<CmdResult> {
        commands::status::run(&self.workflow, &self.gate)
    }

    pub fn set_text(&mut self, field: TextField, value: &str) -> Result<CmdResult> {
        self.gate.check()?;
        commands::fields::set_text(&mut self.workflow, field, value)
    }

    pub fn set_flag(&mut self, flag: Flag, value: bool) -> Result<CmdResult> {
        self.gate.check()?;
        commands::fields::set_flag(&mut self.workflow, flag, value)
    }

    pub fn add_entry(&mut self, edit: &EntryEdit) -> Result<CmdResult> {
        self.gate.check()?;
        commands::entries::add(&mut self.workflow, edit)
    }

    pub fn edit_entry(&mut self, selector: &str, edit: &EntryEdit) -> Result<CmdResult> {
        self.gate.check()?;
        let selector: EntrySelector = selector.parse()?;
        commands::entries::edit(&mut self.workflow, &selector, edit)
    }

    pub fn remove_entry(&mut self, kind: CollectionKind, selector: &str) -> Result<CmdResult> {
        self.gate.check()?;
        let selector: EntrySelector = selector.parse()?;
        commands::entries::remove(&mut self.workflow, kind, &selector)
    }

    pub fn add_list_item(&mut self, kind: ListKind, value: Option<&str>) -> Result<CmdResult> {
        self.gate.check()?;
        commands::lists::add(&mut self.workflow, kind, value)
    }

    pub fn edit_list_item(
        &mut self,
        kind: ListKind,
        position: usize,
        value: &str,
    ) -> Result<CmdResult> {
        self.gate.check()?;
        commands::lists::edit(&mut self.workflow, kind, position, value)
    }

    pub fn remove_list_item(&mut self, kind: ListKind, position: usize) -> Result<CmdResult> {
        self.gate.check()?;
        commands::lists::remove(&mut self.workflow, kind, position)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        self.gate.check()?;
        commands::save::run(&mut self.workflow)
    }

    pub fn discard(&mut self, skip_confirm: bool) -> Result<CmdResult> {
        self.gate.check()?;
        commands::discard::run(&mut self.workflow, skip_confirm)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(self.workflow.gateway().backend())
    }

    pub fn contact<S: NotificationSender>(
        &self,
        sender: &S,
        submission: ContactSubmission,
        settings: &MailSettings,
    ) -> Result<CmdResult> {
        commands::contact::run(sender, submission, settings)
    }
}
