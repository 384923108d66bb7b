//! Gender value object.

use super::errors::ValidationError;
use std::fmt;

/// An applicant's gender, stored exactly as entered (e.g. `male`, `Female`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gender(String);

impl Gender {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Gender should only contain alphabetical characters, and it should not be blank";

    /// Create a new Gender.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidGender` unless the input is a single
    /// run of ASCII letters.
    pub fn new(gender: impl Into<String>) -> Result<Self, ValidationError> {
        let gender = gender.into();

        if !Self::is_valid(&gender) {
            return Err(ValidationError::InvalidGender(gender));
        }

        Ok(Self(gender))
    }

    /// Returns true if the given string is a valid gender.
    pub fn is_valid(gender: &str) -> bool {
        !gender.is_empty() && gender.chars().all(|c| c.is_ascii_alphabetic())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
