//! Domain validation errors.

use std::fmt;

use super::{
    Address, Cap, Email, Gender, GraduationDate, JobId, JobTitle, Major, Name, Phone, Tag,
    University,
};

/// Errors that can occur during domain value object validation.
///
/// Each variant keeps the rejected input for debugging, while `Display`
/// always renders the field's fixed constraint message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is invalid.
    InvalidName(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided address is invalid.
    InvalidAddress(String),

    /// The provided gender is invalid.
    InvalidGender(String),

    /// The provided graduation date is invalid.
    InvalidGraduationDate(String),

    /// The provided CAP is invalid.
    InvalidCap(String),

    /// The provided university is invalid.
    InvalidUniversity(String),

    /// The provided major is invalid.
    InvalidMajor(String),

    /// The provided job ID is invalid.
    InvalidJobId(String),

    /// The provided job title is invalid.
    InvalidJobTitle(String),

    /// The provided tag is invalid.
    InvalidTag(String),
}

impl ValidationError {
    /// The constraint message of the field that failed validation.
    pub fn constraint(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => Name::MESSAGE_CONSTRAINTS,
            Self::InvalidPhone(_) => Phone::MESSAGE_CONSTRAINTS,
            Self::InvalidEmail(_) => Email::MESSAGE_CONSTRAINTS,
            Self::InvalidAddress(_) => Address::MESSAGE_CONSTRAINTS,
            Self::InvalidGender(_) => Gender::MESSAGE_CONSTRAINTS,
            Self::InvalidGraduationDate(_) => GraduationDate::MESSAGE_CONSTRAINTS,
            Self::InvalidCap(_) => Cap::MESSAGE_CONSTRAINTS,
            Self::InvalidUniversity(_) => University::MESSAGE_CONSTRAINTS,
            Self::InvalidMajor(_) => Major::MESSAGE_CONSTRAINTS,
            Self::InvalidJobId(_) => JobId::MESSAGE_CONSTRAINTS,
            Self::InvalidJobTitle(_) => JobTitle::MESSAGE_CONSTRAINTS,
            Self::InvalidTag(_) => Tag::MESSAGE_CONSTRAINTS,
        }
    }

    /// The raw input that was rejected.
    pub fn rejected_value(&self) -> &str {
        match self {
            Self::InvalidName(v)
            | Self::InvalidPhone(v)
            | Self::InvalidEmail(v)
            | Self::InvalidAddress(v)
            | Self::InvalidGender(v)
            | Self::InvalidGraduationDate(v)
            | Self::InvalidCap(v)
            | Self::InvalidUniversity(v)
            | Self::InvalidMajor(v)
            | Self::InvalidJobId(v)
            | Self::InvalidJobTitle(v)
            | Self::InvalidTag(v) => v,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.constraint())
    }
}

impl std::error::Error for ValidationError {}
