//! Major value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// The first character must be a letter, otherwise " " would be a valid major.
static MAJOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z ]*$").expect("valid major regex"));

/// An applicant's field of study.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Major(String);

impl Major {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Major should only contain alphabetical characters and spaces, and it should not be blank";

    /// Create a new Major.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidMajor` if the major is blank or contains
    /// anything other than ASCII letters and spaces.
    pub fn new(major: impl Into<String>) -> Result<Self, ValidationError> {
        let major = major.into();

        if !Self::is_valid(&major) {
            return Err(ValidationError::InvalidMajor(major));
        }

        Ok(Self(major))
    }

    /// Returns true if the given string is a valid major.
    pub fn is_valid(major: &str) -> bool {
        MAJOR_RE.is_match(major)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Major {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
