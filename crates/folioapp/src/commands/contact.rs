use crate::commands::{CmdMessage, CmdResult};
use crate::contact::{self, ContactOutcome, ContactSubmission, MailSettings, NotificationSender};
use crate::error::Result;

pub const SENT_TEXT: &str = "Thank you! Your message has been sent.";

/// Validates and sends a contact form submission. Needs no session.
pub fn run<S: NotificationSender>(
    sender: &S,
    submission: ContactSubmission,
    settings: &MailSettings,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match contact::submit(sender, submission, settings) {
        ContactOutcome::Sent(_) => result.add_message(CmdMessage::success(SENT_TEXT)),
        ContactOutcome::Invalid(errors) => {
            for error in errors {
                result.add_message(CmdMessage::error(format!(
                    "{}: {}",
                    error.field, error.message
                )));
            }
        }
        ContactOutcome::Failed { reason, .. } => {
            result.add_message(CmdMessage::error(contact::RETRY_TEXT));
            result.add_message(CmdMessage::info(reason));
        }
    }
    Ok(result)
}
