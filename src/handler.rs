//! Turns one raw contact-form request into exactly one [`ContactResponse`].
//!
//! The body is decoded, validated and, only if it is valid, handed to a
//! [`MailSender`] once. Whatever goes wrong along the way ends up as a
//! response, never as a panic or a propagated error.

use actix_web::http::StatusCode;
use tracing::field::display;

use crate::domain::submission_form::ValidationError;
use crate::domain::{Submission, SubmissionForm};
use crate::mail_sender::{MailSender, SendError};
use crate::utility::error_chain_fmt;

pub const EMAIL_SENT: &str = "Email sent successfully!";
pub const MISSING_FIELDS: &str = "All fields are required.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const SEND_FAILED: &str = "Failed to send email. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Ok,
    InvalidInput,
    SendFailure,
}

/// What the caller gets back. Only `message` goes over the wire; `status`
/// travels as the HTTP status code.
#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactResponse {
    #[serde(skip)]
    pub status: ResponseStatus,
    pub message: &'static str,
}

impl ContactResponse {
    pub fn ok() -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: EMAIL_SENT,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.status {
            ResponseStatus::Ok => StatusCode::OK,
            ResponseStatus::InvalidInput => StatusCode::BAD_REQUEST,
            ResponseStatus::SendFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{}", SEND_FAILED)]
    SendFailure(#[from] SendError),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<&ContactError> for ContactResponse {
    fn from(error: &ContactError) -> Self {
        match error {
            ContactError::Validation(ValidationError::MissingFields) => Self {
                status: ResponseStatus::InvalidInput,
                message: MISSING_FIELDS,
            },
            ContactError::Validation(ValidationError::InvalidEmail) => Self {
                status: ResponseStatus::InvalidInput,
                message: INVALID_EMAIL,
            },
            // The provider's own message stays in the logs.
            ContactError::SendFailure(_) => Self {
                status: ResponseStatus::SendFailure,
                message: SEND_FAILED,
            },
        }
    }
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(raw, sender),
    fields(submitter_email = tracing::field::Empty)
)]
pub async fn handle<S: MailSender>(raw: &[u8], sender: &S) -> ContactResponse {
    match try_handle(raw, sender).await {
        Ok(()) => {
            tracing::info!("Contact email handed over to the mail provider");
            ContactResponse::ok()
        }
        Err(error) => {
            match &error {
                ContactError::Validation(_) => {
                    tracing::info!(%error, "Rejected an invalid contact form submission");
                }
                ContactError::SendFailure(_) => {
                    tracing::error!(
                        error.cause_chain = ?error,
                        error.message = %error,
                        "Failed to send a contact email"
                    );
                }
            }
            ContactResponse::from(&error)
        }
    }
}

async fn try_handle<S: MailSender>(raw: &[u8], sender: &S) -> Result<(), ContactError> {
    let submission = Submission::try_from(decode(raw))?;
    tracing::Span::current().record("submitter_email", display(submission.email()));
    sender.send(&submission).await?;
    Ok(())
}

// A body that is not a JSON object with string fields is treated like an empty form.
fn decode(raw: &[u8]) -> SubmissionForm {
    serde_json::from_slice(raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Request body is not a contact form");
        SubmissionForm::default()
    })
}
