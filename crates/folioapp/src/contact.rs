//! # Contact Form
//!
//! Visitors leave a name, a way to reach them (email, phone, or both) and a
//! subject. A valid submission is turned into an [`OutgoingMessage`] and handed
//! to a [`NotificationSender`]; how it travels from there is the sender's
//! business.
//!
//! When sending fails the submission comes back untouched in
//! [`ContactOutcome::Failed`], so the form can be shown again with the
//! visitor's input intact.

use crate::error::{FolioError, Result};
use crate::store::write_atomic;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

const NOT_PROVIDED: &str = "Not provided";

pub const RETRY_TEXT: &str = "Your message could not be sent. Please try again in a moment.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl ContactSubmission {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Please enter your name"));
        }

        let email = self.email.trim();
        let phone = self.phone.trim();
        if email.is_empty() && phone.is_empty() {
            let msg = "Please enter an email address or a phone number";
            errors.push(FieldError::new("email", msg));
            errors.push(FieldError::new("phone", msg));
        }
        if !email.is_empty() && !EMAIL_RE.is_match(email) {
            errors.push(FieldError::new("email", "Email address is not valid"));
        }

        if self.subject.trim().is_empty() {
            errors.push(FieldError::new("subject", "Please enter a subject"));
        }
        errors
    }
}

/// Where contact messages go and where replies should come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub body: String,
}

fn or_not_provided(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        NOT_PROVIDED
    } else {
        trimmed
    }
}

pub fn compose(submission: &ContactSubmission, settings: &MailSettings) -> OutgoingMessage {
    let name = submission.name.trim();
    let email = submission.email.trim();
    let body = format!(
        "New Contact Form Submission\n\nName: {}\nEmail: {}\nPhone: {}\nSubject: {}\n",
        name,
        or_not_provided(email),
        or_not_provided(&submission.phone),
        submission.subject.trim(),
    );
    OutgoingMessage {
        from: settings.from.clone(),
        to: settings.to.clone(),
        reply_to: if email.is_empty() {
            settings.from.clone()
        } else {
            email.to_string()
        },
        subject: format!("New Contact Form Submission from {}", name),
        body,
    }
}

/// Delivers composed messages.
pub trait NotificationSender {
    fn send(&self, message: &OutgoingMessage) -> Result<()>;
}

#[derive(Debug)]
pub enum ContactOutcome {
    Sent(OutgoingMessage),
    Invalid(Vec<FieldError>),
    /// Sending failed; the submission is handed back for a retry.
    Failed {
        submission: ContactSubmission,
        reason: String,
    },
}

pub fn submit<S: NotificationSender>(
    sender: &S,
    submission: ContactSubmission,
    settings: &MailSettings,
) -> ContactOutcome {
    let errors = submission.validate();
    if !errors.is_empty() {
        return ContactOutcome::Invalid(errors);
    }

    let message = compose(&submission, settings);
    match sender.send(&message) {
        Ok(()) => {
            tracing::info!(subject = %message.subject, "contact message sent");
            ContactOutcome::Sent(message)
        }
        Err(e) => {
            tracing::warn!(error = %e, "contact message failed");
            ContactOutcome::Failed {
                submission,
                reason: e.to_string(),
            }
        }
    }
}

/// Writes each message as a JSON file into an outbox directory, for a mail
/// relay to pick up.
pub struct SpoolSender {
    dir: PathBuf,
}

impl SpoolSender {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl NotificationSender for SpoolSender {
    fn send(&self, message: &OutgoingMessage) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(FolioError::Io)?;
        let stamp = Utc::now().format("%Y%m%dT%H%M%S");
        let id = Uuid::new_v4();
        let target = self.dir.join(format!("message-{}-{}.json", stamp, id));
        let tmp = self.dir.join(format!(".message-{}.tmp", id));

        let content = serde_json::to_string_pretty(message).map_err(FolioError::Serialization)?;
        write_atomic(&tmp, &target, &content)
    }
}

/// Collects messages in memory, for testing.
#[derive(Default)]
pub struct MemSender {
    sent: RefCell<Vec<OutgoingMessage>>,
    fail: Cell<bool>,
}

impl MemSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.set(fail);
    }

    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.sent.borrow().clone()
    }
}

impl NotificationSender for MemSender {
    fn send(&self, message: &OutgoingMessage) -> Result<()> {
        if self.fail.get() {
            return Err(FolioError::Transport("Simulated send error".to_string()));
        }
        self.sent.borrow_mut().push(message.clone());
        Ok(())
    }
}
