//! Job ID value object.

use super::errors::ValidationError;
use std::fmt;

/// Identifier of the job opening an applicant applied to.
///
/// IDs are compared case-sensitively: `J9204342` and `j9204342` are different
/// openings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Job ID should be alphanumeric";

    /// Create a new JobId.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidJobId` unless the ID is a non-empty run
    /// of ASCII letters and digits.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();

        if !Self::is_valid(&id) {
            return Err(ValidationError::InvalidJobId(id));
        }

        Ok(Self(id))
    }

    /// Returns true if the given string is a valid job ID.
    pub fn is_valid(id: &str) -> bool {
        !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
