use validator::validate_email;

/// The address contact-form emails are sent from. Comes from configuration,
/// never from a request.
#[derive(Debug, Clone)]
pub struct SenderEmail(String);

impl AsRef<str> for SenderEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SenderEmail {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SenderEmail::parse(value)
    }
}

impl std::fmt::Display for SenderEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl SenderEmail {
    pub fn parse(email: String) -> Result<Self, String> {
        if validate_email(&email) {
            Ok(Self(email))
        } else {
            Err(format!("{} is not a valid sender email.", email))
        }
    }
}
