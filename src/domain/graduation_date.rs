//! Graduation date value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static GRADUATION_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{4}$").expect("valid graduation date regex"));

/// The month and year an applicant graduates, in `MM-YYYY` form.
///
/// # Example
///
/// ```
/// use applicant_records::domain::GraduationDate;
///
/// let date = GraduationDate::new("05-2024").unwrap();
/// assert_eq!(date.month(), 5);
/// assert_eq!(date.year(), 2024);
/// assert!(GraduationDate::new("13-2024").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraduationDate(String);

impl GraduationDate {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Graduation date should be of the format MM-YYYY, containing only digits and a '-' separator";

    /// Create a new GraduationDate.
    ///
    /// # Validation Rules
    ///
    /// - Exactly two digits, a `-`, then exactly four digits
    /// - The month must be a calendar month (01 to 12)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidGraduationDate` if either rule fails.
    pub fn new(date: impl Into<String>) -> Result<Self, ValidationError> {
        let date = date.into();

        if !Self::is_valid(&date) {
            return Err(ValidationError::InvalidGraduationDate(date));
        }

        Ok(Self(date))
    }

    /// Returns true if the given string is a valid graduation date.
    pub fn is_valid(date: &str) -> bool {
        GRADUATION_DATE_RE.is_match(date) && Self::first_day_of(date).is_some()
    }

    fn first_day_of(date: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&format!("01-{date}"), "%d-%m-%Y").ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Calendar month, 1 to 12.
    pub fn month(&self) -> u32 {
        self.0[..2].parse().unwrap_or_default()
    }

    pub fn year(&self) -> i32 {
        self.0[3..].parse().unwrap_or_default()
    }
}

impl fmt::Display for GraduationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
