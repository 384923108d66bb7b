//! Tag value object.

use super::errors::ValidationError;
use std::fmt;

/// A single-word label attached to a record, such as `KIV` or `rejected`.
///
/// Tags order by name so tag sets render and persist deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    /// Create a new Tag.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTag` unless the name is a non-empty run
    /// of ASCII letters and digits.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !Self::is_valid(&name) {
            return Err(ValidationError::InvalidTag(name));
        }

        Ok(Self(name))
    }

    /// Returns true if the given string is a valid tag name.
    pub fn is_valid(name: &str) -> bool {
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tags render in brackets so a tag list reads as `[KIV][rejected]`.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
