//! University value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static UNIVERSITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z ]*$").expect("valid university regex"));

/// The university an applicant attends or graduated from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct University(String);

impl University {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "University should only contain alphabetical characters and spaces, and it should not be blank";

    /// Create a new University.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidUniversity` if the name is blank or
    /// contains anything other than ASCII letters and spaces.
    pub fn new(university: impl Into<String>) -> Result<Self, ValidationError> {
        let university = university.into();

        if !Self::is_valid(&university) {
            return Err(ValidationError::InvalidUniversity(university));
        }

        Ok(Self(university))
    }

    /// Returns true if the given string is a valid university name.
    pub fn is_valid(university: &str) -> bool {
        UNIVERSITY_RE.is_match(university)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for University {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
