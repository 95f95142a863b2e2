use crate::domain::submission_form::ValidationError;
use crate::domain::{ContactEmail, SubmissionForm};

/// A form that passed validation. There is no way to build one that did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    name: String,
    email: ContactEmail,
    message: String,
}

impl Submission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &ContactEmail {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<SubmissionForm> for Submission {
    type Error = ValidationError;

    fn try_from(form: SubmissionForm) -> Result<Self, Self::Error> {
        let (Some(name), Some(email), Some(message)) = (form.name(), form.email(), form.message())
        else {
            return Err(ValidationError::MissingFields);
        };
        let email =
            ContactEmail::parse(email.to_owned()).map_err(|_| ValidationError::InvalidEmail)?;
        Ok(Self {
            name: name.to_owned(),
            email,
            message: message.to_owned(),
        })
    }
}
