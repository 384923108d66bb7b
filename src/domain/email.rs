//! Email value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// local-part: alphanumerics and +_.- , never starting or ending with a special char.
// domain: labels of alphanumerics/hyphens joined by periods, last label >= 2 chars.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]([A-Za-z0-9+_.\-]*[A-Za-z0-9])?@([A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?\.)*[A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?$",
    )
    .expect("valid email regex")
});

/// A type-safe wrapper for email addresses.
///
/// # Example
///
/// ```
/// use applicant_records::domain::Email;
///
/// let email = Email::new("johnd@example.com").unwrap();
/// assert_eq!(email.domain(), "example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Emails should be of the format local-part@domain and adhere to the following constraints:\n\
         1. The local-part should only contain alphanumeric characters and these special characters, \
         excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
         2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
         separated by periods.\n\
         The domain name must:\n    \
         - end with a domain label at least 2 characters long\n    \
         - have each domain label start and end with alphanumeric characters\n    \
         - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    /// Create a new Email, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Returns true if the given string is a valid email address.
    pub fn is_valid(email: &str) -> bool {
        if !EMAIL_RE.is_match(email) {
            return false;
        }
        // The regex cannot express the minimum length of the final label.
        email
            .rsplit_once('@')
            .and_then(|(_, domain)| domain.rsplit('.').next())
            .map(|last| last.len() >= 2)
            .unwrap_or(false)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map(|(local, _)| local).unwrap_or("")
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, domain)| domain).unwrap_or("")
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
