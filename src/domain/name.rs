//! Name value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// The first character must not be a space, otherwise " " would be a valid name.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));

/// An applicant's full name.
///
/// Names identify a person: two records with the same name refer to the same
/// person regardless of their other details.
///
/// # Example
///
/// ```
/// use applicant_records::domain::Name;
///
/// let name = Name::new("John Doe").unwrap();
/// assert_eq!(name.as_str(), "John Doe");
/// assert!(Name::new(" ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    /// Create a new Name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is blank or contains
    /// characters other than ASCII letters, digits and spaces.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !Self::is_valid(&name) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(name))
    }

    /// Returns true if the given string is a valid name.
    pub fn is_valid(name: &str) -> bool {
        NAME_RE.is_match(name)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
