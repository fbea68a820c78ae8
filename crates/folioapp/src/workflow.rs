//! # Editor Workflow
//!
//! The state machine around one editing session:
//!
//! ```text
//!            mutation                save                 gateway ok
//!   Clean ────────────▶ Dirty ────────────▶ Saving ─────────────────▶ Clean
//!     ▲                  │  ▲                  │
//!     │     discard      │  │ next action or   │ gateway error
//!     └──────────────────┘  │ notice expiry    ▼
//!     ▲                     └──────────── SaveFailed
//!     │            discard                     │
//!     └────────────────────────────────────────┘
//! ```
//!
//! Save is unavailable in `Clean` and while a save is in flight. Discard is
//! available in `Dirty` and `SaveFailed` only.
//!
//! ## The save window
//!
//! Saving is split into [`EditorWorkflow::begin_save`] and
//! [`EditorWorkflow::finish_save`]. Edits made in between are accepted. On
//! success the baseline becomes the document that was actually written,
//! so edits made during the window keep the session dirty instead of being
//! silently marked as saved. A later discard drops exactly those edits.
//!
//! ## Notices
//!
//! Outcomes are reported through a single transient [`Notice`] that expires
//! after the configured interval; [`EditorWorkflow::tick`] retires it.

use crate::collection::Outcome;
use crate::error::{FolioError, Result};
use crate::gateway::PersistenceGateway;
use crate::model::ContentDocument;
use crate::store::backend::ContentBackend;
use crate::store::DocumentStore;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditorState {
    Clean,
    Dirty,
    Saving,
    SaveFailed,
}

impl fmt::Display for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditorState::Clean => "clean",
            EditorState::Dirty => "dirty",
            EditorState::Saving => "saving",
            EditorState::SaveFailed => "save-failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            raised_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.raised_at) >= ttl
    }
}

/// A save that has been started but not yet completed.
#[derive(Debug)]
pub struct PendingSave {
    payload: ContentDocument,
}

impl PendingSave {
    /// The exact document being sent to the sink.
    pub fn payload(&self) -> &ContentDocument {
        &self.payload
    }
}

#[derive(Debug)]
pub enum SaveOutcome {
    /// Written. `still_dirty` is set when edits arrived during the save window.
    Saved { still_dirty: bool },
    Failed(FolioError),
    /// Nothing to save, or a save is already running.
    Skipped,
}

pub const SAVING_TEXT: &str = "Saving changes...";
pub const SAVED_TEXT: &str = "Changes saved";
pub const DISCARDED_TEXT: &str = "Changes discarded";

pub struct EditorWorkflow<B: ContentBackend> {
    store: DocumentStore,
    gateway: PersistenceGateway<B>,
    state: EditorState,
    notice: Option<Notice>,
    notice_ttl: Duration,
}

impl<B: ContentBackend> EditorWorkflow<B> {
    /// Starts a session on the document currently persisted by the gateway.
    pub fn open(gateway: PersistenceGateway<B>, notice_ttl: Duration) -> Result<Self> {
        let doc = gateway.load()?;
        Ok(Self::with_document(gateway, doc, notice_ttl))
    }

    pub fn with_document(
        gateway: PersistenceGateway<B>,
        doc: ContentDocument,
        notice_ttl: Duration,
    ) -> Self {
        Self {
            store: DocumentStore::new(doc),
            gateway,
            state: EditorState::Clean,
            notice: None,
            notice_ttl,
        }
    }

    /// Continues a session whose working copy was kept elsewhere.
    pub fn resume(
        gateway: PersistenceGateway<B>,
        baseline: ContentDocument,
        working: ContentDocument,
        notice_ttl: Duration,
    ) -> Self {
        let mut workflow = Self::with_document(gateway, baseline, notice_ttl);
        workflow.store.replace(working);
        workflow.refresh_state();
        workflow
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn document(&self) -> &ContentDocument {
        self.store.current()
    }

    pub fn baseline(&self) -> &ContentDocument {
        self.store.baseline()
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn gateway(&self) -> &PersistenceGateway<B> {
        &self.gateway
    }

    pub fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    pub fn can_save(&self) -> bool {
        matches!(self.state, EditorState::Dirty | EditorState::SaveFailed)
    }

    pub fn can_discard(&self) -> bool {
        matches!(self.state, EditorState::Dirty | EditorState::SaveFailed)
    }

    /// The current notice, expired or not.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The current notice if it is still on display at `now`.
    pub fn notice_at(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|n| !n.is_expired(now, self.notice_ttl))
    }

    /// Retires an expired notice; a failed save falls back to `Dirty` with it.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        let expired = self
            .notice
            .as_ref()
            .is_some_and(|n| n.is_expired(now, self.notice_ttl));
        if expired {
            self.notice = None;
            if self.state == EditorState::SaveFailed {
                self.state = EditorState::Dirty;
                self.refresh_state();
            }
        }
    }

    /// Applies one editor operation to the working copy.
    ///
    /// `op` returns `None` to signal that nothing matched; the document is
    /// then left untouched.
    pub fn edit<F>(&mut self, op: F) -> Outcome
    where
        F: FnOnce(&ContentDocument) -> Option<ContentDocument>,
    {
        self.user_action();
        match op(self.store.current()) {
            Some(next) => {
                self.store.replace(next);
                self.refresh_state();
                tracing::debug!(
                    revision = self.store.revision(),
                    state = %self.state,
                    "document updated"
                );
                Outcome::Applied
            }
            None => Outcome::NoOp,
        }
    }

    /// Starts a save. Returns `None` when there is nothing to save or a save
    /// is already in flight.
    pub fn begin_save(&mut self) -> Option<PendingSave> {
        self.user_action();
        if self.state != EditorState::Dirty {
            return None;
        }
        self.state = EditorState::Saving;
        self.notice = Some(Notice::new(NoticeLevel::Info, SAVING_TEXT));
        Some(PendingSave {
            payload: self.store.current().clone(),
        })
    }

    /// Completes a save started with [`begin_save`](Self::begin_save).
    pub fn finish_save(&mut self, pending: PendingSave, result: Result<()>) -> SaveOutcome {
        match result {
            Ok(()) => {
                self.store.commit_persisted(pending.payload);
                self.state = EditorState::Clean;
                self.refresh_state();
                let still_dirty = self.state == EditorState::Dirty;
                tracing::info!(still_dirty, "content saved");
                self.notice = Some(Notice::new(NoticeLevel::Success, SAVED_TEXT));
                SaveOutcome::Saved { still_dirty }
            }
            Err(FolioError::NotPermitted(reason)) => {
                // Refused before any I/O: nothing was attempted, so nothing failed.
                self.state = EditorState::Dirty;
                self.refresh_state();
                self.notice = Some(Notice::new(NoticeLevel::Error, reason.clone()));
                SaveOutcome::Failed(FolioError::NotPermitted(reason))
            }
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                self.state = EditorState::SaveFailed;
                self.notice = Some(Notice::new(
                    NoticeLevel::Error,
                    format!("Failed to save changes: {}", failure_reason(&e)),
                ));
                SaveOutcome::Failed(e)
            }
        }
    }

    /// Persists the working copy through the gateway.
    pub fn save(&mut self) -> SaveOutcome {
        let Some(pending) = self.begin_save() else {
            return SaveOutcome::Skipped;
        };
        let result = self.gateway.save(pending.payload());
        self.finish_save(pending, result)
    }

    /// Drops all unsaved changes.
    pub fn discard(&mut self) -> Outcome {
        if !self.can_discard() {
            return Outcome::NoOp;
        }
        let sections = self.store.changed_sections();
        self.store.reset_to_baseline();
        self.state = EditorState::Clean;
        self.notice = Some(Notice::new(NoticeLevel::Info, DISCARDED_TEXT));
        tracing::info!(?sections, "changes discarded");
        Outcome::Applied
    }

    fn user_action(&mut self) {
        if self.state == EditorState::SaveFailed {
            self.state = EditorState::Dirty;
            self.notice = None;
            self.refresh_state();
        }
    }

    fn refresh_state(&mut self) {
        if matches!(self.state, EditorState::Saving | EditorState::SaveFailed) {
            return;
        }
        self.state = if self.store.is_dirty() {
            EditorState::Dirty
        } else {
            EditorState::Clean
        };
    }
}

fn failure_reason(e: &FolioError) -> String {
    match e {
        FolioError::Transport(reason) => reason.clone(),
        other => other.to_string(),
    }
}
