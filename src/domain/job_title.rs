//! Job title value object.

use super::errors::ValidationError;
use std::fmt;

/// Title of the job opening an applicant applied to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobTitle(String);

impl JobTitle {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Job titles can take any values except '|', and it should not be blank";

    /// Separator that may never appear inside a title.
    pub const FORBIDDEN_SEPARATOR: char = '|';

    /// Create a new JobTitle.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidJobTitle` if the title is blank, starts
    /// with whitespace, or contains [`JobTitle::FORBIDDEN_SEPARATOR`].
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();

        if !Self::is_valid(&title) {
            return Err(ValidationError::InvalidJobTitle(title));
        }

        Ok(Self(title))
    }

    /// Returns true if the given string is a valid job title.
    pub fn is_valid(title: &str) -> bool {
        title.chars().next().is_some_and(|c| !c.is_whitespace())
            && !title.contains(Self::FORBIDDEN_SEPARATOR)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
