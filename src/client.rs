//! The visitor's side of the contact form.
//!
//! [`ContactForm`] is a plain value: every edit and every submit returns a new
//! form instead of mutating the old one. Submitting runs the same checks the
//! server runs before anything goes over the network.

use std::time::Duration;

use reqwest::Client;

use crate::domain::{SubmissionForm, ValidationResult, validate};
use crate::handler::{INVALID_EMAIL, MISSING_FIELDS};

pub const SENT_FEEDBACK: &str = "Your message has been sent successfully!";
pub const REJECTED_FEEDBACK: &str = "Something went wrong. Please try again later.";
pub const UNREACHABLE_FEEDBACK: &str =
    "An error occurred while sending your message. Please try again.";

/// How the contact endpoint answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { message: Option<String> },
}

#[derive(serde::Deserialize)]
struct ApiMessage {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContactApiClient {
    http_client: Client,
    endpoint: String,
}

impl ContactApiClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            endpoint,
        })
    }

    /// Posts the form as JSON. The body is decoded whatever the status, so a
    /// response that is not JSON is an error even when it is a 200.
    #[tracing::instrument(name = "Posting a contact form", skip(self, form), fields(endpoint = %self.endpoint))]
    pub async fn submit(&self, form: &SubmissionForm) -> Result<SubmitOutcome, reqwest::Error> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(form)
            .send()
            .await?;
        let accepted = response.status().is_success();
        let body: ApiMessage = response.json().await?;
        if accepted {
            Ok(SubmitOutcome::Accepted)
        } else {
            Ok(SubmitOutcome::Rejected {
                message: body.message.filter(|m| !m.is_empty()),
            })
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    feedback: Option<String>,
    loading: bool,
}

impl ContactForm {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_email(self, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..self
        }
    }

    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..self
        }
    }

    /// The form while a submission is in flight.
    pub fn submitting(&self) -> Self {
        Self {
            feedback: None,
            loading: true,
            ..self.clone()
        }
    }

    pub async fn submit(self, api: &ContactApiClient) -> Self {
        let pending = self.submitting();
        let submission = SubmissionForm::new(&pending.name, &pending.email, &pending.message);

        match validate(&submission) {
            ValidationResult::MissingFields => return pending.settled(MISSING_FIELDS),
            ValidationResult::InvalidEmail => return pending.settled(INVALID_EMAIL),
            ValidationResult::Valid => {}
        }

        match api.submit(&submission).await {
            Ok(SubmitOutcome::Accepted) => Self {
                feedback: Some(SENT_FEEDBACK.into()),
                ..Self::default()
            },
            Ok(SubmitOutcome::Rejected { message }) => {
                pending.settled(message.as_deref().unwrap_or(REJECTED_FEEDBACK))
            }
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Contact form could not be delivered");
                pending.settled(UNREACHABLE_FEEDBACK)
            }
        }
    }

    fn settled(self, feedback: &str) -> Self {
        Self {
            feedback: Some(feedback.into()),
            loading: false,
            ..self
        }
    }
}
