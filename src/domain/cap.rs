//! CAP (cumulative average point) value object.

use super::errors::ValidationError;
use std::fmt;

/// An applicant's CAP: the achieved value out of a maximum, such as `3.50/4.00`.
///
/// Both components are kept at two decimal places, the precision of the
/// canonical `achieved/maximum` text form, so parsing that text back always
/// yields an equal `Cap`.
///
/// # Example
///
/// ```
/// use applicant_records::domain::Cap;
///
/// let cap: Cap = "3.5/4".parse().unwrap();
/// assert_eq!(cap.to_string(), "3.50/4.00");
/// assert!("10/5".parse::<Cap>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cap {
    value: f64,
    maximum: f64,
}

impl Cap {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "CAPs should consist of a value less than or equal to the maximum value, e.g. 4.0/5.0";
    pub const MINIMUM: f64 = 0.0;
    pub const SEPARATOR: char = '/';

    /// Create a new Cap from its two components.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCap` unless both components are finite
    /// and `MINIMUM <= value <= maximum`.
    pub fn new(value: f64, maximum: f64) -> Result<Self, ValidationError> {
        let invalid = || {
            ValidationError::InvalidCap(format!("{}{}{}", value, Self::SEPARATOR, maximum))
        };

        if !Self::is_valid(value, maximum) {
            return Err(invalid());
        }

        let (value, maximum) = (round_to_hundredths(value), round_to_hundredths(maximum));
        if !Self::is_valid(value, maximum) {
            return Err(invalid());
        }

        Ok(Self { value, maximum })
    }

    /// Returns true if the pair forms a valid CAP.
    pub fn is_valid(value: f64, maximum: f64) -> bool {
        value.is_finite() && maximum.is_finite() && value >= Self::MINIMUM && value <= maximum
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }
}

// Rounds through the two-decimal text form, so the stored value is exactly
// what that text parses back to, at any magnitude. Adding 0.0 turns -0.0
// into 0.0 so it never renders as "-0.00".
fn round_to_hundredths(x: f64) -> f64 {
    format!("{:.2}", x).parse::<f64>().unwrap_or(x) + 0.0
}

impl std::str::FromStr for Cap {
    type Err = ValidationError;

    /// Parse `achieved/maximum`; surrounding whitespace on each part is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidCap(s.to_string());

        let (value, maximum) = s.split_once(Self::SEPARATOR).ok_or_else(invalid)?;
        let value: f64 = value.trim().parse().map_err(|_| invalid())?;
        let maximum: f64 = maximum.trim().parse().map_err(|_| invalid())?;

        Self::new(value, maximum).map_err(|_| invalid())
    }
}

impl fmt::Display for Cap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}{}{:.2}", self.value, Self::SEPARATOR, self.maximum)
    }
}
