//! # Command Layer
//!
//! The business logic of folio. Each command lives in its own submodule as a
//! plain function over the workflow, the session gate or a sender.
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Turn a user request into editor operations on the [`EditorWorkflow`](crate::workflow::EditorWorkflow)
//! - Decide what a [`Outcome::NoOp`](crate::collection::Outcome::NoOp) means
//!   to the user and say so through a leveled message
//! - Return structured [`CmdResult`]s, never strings
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: no stdout, stderr or colors
//! - **Argument parsing**: the CLI's job
//! - **Session checks**: the API facade gates editing commands
//! - **Prompts**: destructive commands take a `skip_confirm` flag and report
//!   what would happen instead of asking
//!
//! ## Testing Strategy
//!
//! Most of the library's behavioral tests live here, running against
//! [`MemBackend`](crate::store::mem_backend::MemBackend) so no filesystem is
//! involved.
//!
//! ## Command Modules
//!
//! - [`fields`]: text fields and feature flags
//! - [`entries`]: projects, services, socials, experiences
//! - [`lists`]: languages, frameworks, others
//! - [`save`], [`discard`]: persistence and rollback
//! - [`status`], [`view`]: read-only reporting
//! - [`session`]: login and logout
//! - [`contact`]: the public contact form
//! - [`init`]: starter content
//! - [`helpers`]: selector resolution

use crate::diff::Section;
use crate::gateway::Environment;
use crate::model::{ContentDocument, EntryId};
use crate::workflow::{EditorState, Notice, NoticeLevel};
use serde::Serialize;

pub mod contact;
pub mod discard;
pub mod entries;
pub mod fields;
pub mod helpers;
pub mod init;
pub mod lists;
pub mod save;
pub mod session;
pub mod status;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

impl From<&Notice> for CmdMessage {
    fn from(notice: &Notice) -> Self {
        match notice.level {
            NoticeLevel::Info => CmdMessage::info(notice.text.clone()),
            NoticeLevel::Success => CmdMessage::success(notice.text.clone()),
            NoticeLevel::Error => CmdMessage::error(notice.text.clone()),
        }
    }
}

/// Snapshot of an editing session, for `status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub state: EditorState,
    pub dirty: bool,
    pub authenticated: bool,
    pub environment: Environment,
    pub changed_sections: Vec<Section>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    /// Document to display (for `show`).
    pub document: Option<ContentDocument>,
    /// Id of an entry created by the command.
    pub created_id: Option<EntryId>,
    pub status: Option<StatusReport>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_document(mut self, document: ContentDocument) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_created_id(mut self, id: EntryId) -> Self {
        self.created_id = Some(id);
        self
    }

    pub fn with_status(mut self, status: StatusReport) -> Self {
        self.status = Some(status);
        self
    }

    /// True when any message is an error.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
