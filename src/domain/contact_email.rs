use once_cell::sync::Lazy;
use regex::Regex;

// Whitespace the way browsers' `\s` sees it: ECMAScript WhiteSpace and
// LineTerminator. Unlike regex's `\s` this includes U+FEFF and excludes U+0085.
const WHITESPACE: &str = r"\t\n\x{0B}\x{0C}\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

// local-part `@` domain `.` tld, none of them containing whitespace or another `@`.
static ADDRESS_SHAPE: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{WHITESPACE}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("address pattern is a valid regex")
});

/// The address a visitor typed into the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContactEmail {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ContactEmail::parse(value)
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl ContactEmail {
    /// Returns a `ContactEmail` if the input has the shape of an address.
    /// The value is kept exactly as given: no trimming, no lowercasing.
    pub fn parse(email: String) -> Result<Self, String> {
        if Self::is_well_formed(&email) {
            Ok(Self(email))
        } else {
            Err(format!("{} is not a valid contact email.", email))
        }
    }

    pub fn is_well_formed(email: &str) -> bool {
        ADDRESS_SHAPE.is_match(email)
    }
}
