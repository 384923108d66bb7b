//! Phone value object.

use super::errors::ValidationError;
use std::fmt;

/// A type-safe wrapper for an applicant's phone number.
///
/// # Example
///
/// ```
/// use applicant_records::domain::Phone;
///
/// let phone = Phone::new("98765432").unwrap();
/// assert_eq!(phone.as_str(), "98765432");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should not be blank";

    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty
    /// - Every character must be an ASCII digit
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Returns true if the given string is a valid phone number.
    pub fn is_valid(phone: &str) -> bool {
        !phone.is_empty() && phone.chars().all(|c| c.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("98765432").unwrap();
        assert_eq!(phone.as_str(), "98765432");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(!Phone::is_valid(""));
        assert!(!Phone::is_valid(" "));
        assert!(!Phone::is_valid("911a"));
        assert!(!Phone::is_valid("+651234"));
        assert!(!Phone::is_valid("9011 1234"));
        assert!(Phone::is_valid("911"));
        assert!(Phone::is_valid("93121534"));
        assert!(Phone::is_valid("124293842033123"));
    }

    #[test]
    fn test_phone_construction_agrees_with_validation() {
        for raw in ["", "911a", "+651234", "12345", "0"] {
            assert_eq!(Phone::new(raw).is_ok(), Phone::is_valid(raw), "input {raw:?}");
        }
    }

    #[test]
    fn test_phone_error_message() {
        let err = Phone::new("phone").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("phone".to_string()));
        assert_eq!(err.to_string(), Phone::MESSAGE_CONSTRAINTS);
    }
}
