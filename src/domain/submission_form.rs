use crate::domain::ContactEmail;

/// The request body exactly as the visitor sent it. Any field may be absent.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    MissingFields,
    InvalidEmail,
}

/// Why a form could not become a [`Submission`](crate::domain::Submission).
/// The `Display` text is what the visitor gets to see.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl From<ValidationError> for ValidationResult {
    fn from(value: ValidationError) -> Self {
        match value {
            ValidationError::MissingFields => ValidationResult::MissingFields,
            ValidationError::InvalidEmail => ValidationResult::InvalidEmail,
        }
    }
}

impl SubmissionForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    pub fn email(&self) -> Option<&str> {
        present(&self.email)
    }

    pub fn message(&self) -> Option<&str> {
        present(&self.message)
    }
}

// Absent and empty are the same thing. Whitespace-only counts as present.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Checks presence of every field first, the address shape second.
pub fn validate(form: &SubmissionForm) -> ValidationResult {
    match (form.name(), form.email(), form.message()) {
        (Some(_), Some(email), Some(_)) if ContactEmail::is_well_formed(email) => {
            ValidationResult::Valid
        }
        (Some(_), Some(_), Some(_)) => ValidationResult::InvalidEmail,
        _ => ValidationResult::MissingFields,
    }
}
