//! Prefix definitions shared by the command parsers.

use std::fmt;

/// A literal token that introduces a field value, such as `name/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(token: &'static str) -> Self {
        Self(token)
    }

    pub fn token(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("name/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("address/");
pub const PREFIX_GENDER: Prefix = Prefix::new("gender/");
pub const PREFIX_GRADUATION_DATE: Prefix = Prefix::new("graduationDate/");
pub const PREFIX_CAP: Prefix = Prefix::new("cap/");
pub const PREFIX_UNIVERSITY: Prefix = Prefix::new("university/");
pub const PREFIX_MAJOR: Prefix = Prefix::new("major/");
pub const PREFIX_JOB_ID: Prefix = Prefix::new("jobId/");
pub const PREFIX_JOB_TITLE: Prefix = Prefix::new("jobTitle/");
pub const PREFIX_TAG: Prefix = Prefix::new("tag/");

/// Every prefix that carries exactly one value, in record field order.
pub const SINGLE_VALUED_PREFIXES: [Prefix; 11] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_GENDER,
    PREFIX_GRADUATION_DATE,
    PREFIX_CAP,
    PREFIX_UNIVERSITY,
    PREFIX_MAJOR,
    PREFIX_JOB_ID,
    PREFIX_JOB_TITLE,
];

/// Every prefix a record command recognises.
pub const RECORD_PREFIXES: [Prefix; 12] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_GENDER,
    PREFIX_GRADUATION_DATE,
    PREFIX_CAP,
    PREFIX_UNIVERSITY,
    PREFIX_MAJOR,
    PREFIX_JOB_ID,
    PREFIX_JOB_TITLE,
    PREFIX_TAG,
];
