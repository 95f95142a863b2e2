use std::future::Future;

use crate::domain::{ContactEmail, Submission};
use crate::email_client::EmailClient;
use crate::utility::error_chain_fmt;

pub const CONTACT_SUBJECT: &str = "Contact Form Submission";

/// Hands a validated submission over to whatever actually delivers mail.
pub trait MailSender {
    fn send(&self, submission: &Submission) -> impl Future<Output = Result<(), SendError>> + Send;
}

/// The mail provider did not accept the message. For operators only.
#[derive(thiserror::Error)]
#[error("Failed to hand the contact email over to the mail provider.")]
pub struct SendError(#[source] pub anyhow::Error);

impl std::fmt::Debug for SendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<reqwest::Error> for SendError {
    fn from(value: reqwest::Error) -> Self {
        Self(value.into())
    }
}

/// Where contact emails end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Configured(ContactEmail),
    /// Back to whoever filled in the form.
    Submitter,
}

impl Destination {
    fn resolve<'a>(&'a self, submission: &'a Submission) -> &'a ContactEmail {
        match self {
            Destination::Configured(address) => address,
            Destination::Submitter => submission.email(),
        }
    }
}

pub fn format_body(submission: &Submission) -> String {
    format!(
        "Message from {} ({}):\n\n{}",
        submission.name(),
        submission.email(),
        submission.message()
    )
}

#[derive(Debug)]
pub struct ContactMailer {
    email_client: EmailClient,
    destination: Destination,
}

impl ContactMailer {
    pub fn new(email_client: EmailClient, destination: Destination) -> Self {
        Self {
            email_client,
            destination,
        }
    }
}

impl MailSender for ContactMailer {
    async fn send(&self, submission: &Submission) -> Result<(), SendError> {
        let recipient = self.destination.resolve(submission);
        self.email_client
            .send_email(
                recipient,
                Some(submission.email()),
                CONTACT_SUBJECT,
                &format_body(submission),
            )
            .await?;
        Ok(())
    }
}
