//! Address value object.

use super::errors::ValidationError;
use std::fmt;

/// An applicant's home address. Any text is accepted as long as it does not
/// start with whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    /// Create a new Address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAddress` if the address is blank.
    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();

        if !Self::is_valid(&address) {
            return Err(ValidationError::InvalidAddress(address));
        }

        Ok(Self(address))
    }

    /// Returns true if the given string is a valid address.
    pub fn is_valid(address: &str) -> bool {
        address.chars().next().is_some_and(|c| !c.is_whitespace())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
