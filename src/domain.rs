pub mod contact_email;
pub mod sender_email;
pub mod submission;
pub mod submission_form;

pub use contact_email::ContactEmail;
pub use sender_email::SenderEmail;
pub use submission::Submission;
pub use submission_form::{SubmissionForm, ValidationResult, validate};
