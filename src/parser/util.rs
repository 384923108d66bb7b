//! Helpers that turn raw token values into domain values.
//!
//! Every helper trims its input before validating it.

use crate::domain::{
    Address, Cap, Email, Gender, GraduationDate, JobId, JobTitle, Major, Name, Phone, Tag,
    University,
};
use crate::error::{ParseError, ParseResult};
use std::collections::BTreeSet;
use std::num::NonZeroUsize;

/// Parse a 1-based index. Signs, spaces inside the number and zero are rejected.
pub fn parse_index(raw: &str) -> ParseResult<NonZeroUsize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex(raw.to_string()));
    }
    trimmed
        .parse::<NonZeroUsize>()
        .map_err(|_| ParseError::InvalidIndex(raw.to_string()))
}

pub fn parse_name(raw: &str) -> ParseResult<Name> {
    Ok(Name::new(raw.trim())?)
}

pub fn parse_phone(raw: &str) -> ParseResult<Phone> {
    Ok(Phone::new(raw.trim())?)
}

pub fn parse_email(raw: &str) -> ParseResult<Email> {
    Ok(Email::new(raw.trim())?)
}

pub fn parse_address(raw: &str) -> ParseResult<Address> {
    Ok(Address::new(raw.trim())?)
}

pub fn parse_gender(raw: &str) -> ParseResult<Gender> {
    Ok(Gender::new(raw.trim())?)
}

pub fn parse_graduation_date(raw: &str) -> ParseResult<GraduationDate> {
    Ok(GraduationDate::new(raw.trim())?)
}

/// Parse `achieved/maximum`, e.g. `3.50/4.00`.
pub fn parse_cap(raw: &str) -> ParseResult<Cap> {
    Ok(raw.trim().parse::<Cap>()?)
}

pub fn parse_university(raw: &str) -> ParseResult<University> {
    Ok(University::new(raw.trim())?)
}

pub fn parse_major(raw: &str) -> ParseResult<Major> {
    Ok(Major::new(raw.trim())?)
}

pub fn parse_job_id(raw: &str) -> ParseResult<JobId> {
    Ok(JobId::new(raw.trim())?)
}

pub fn parse_job_title(raw: &str) -> ParseResult<JobTitle> {
    Ok(JobTitle::new(raw.trim())?)
}

pub fn parse_tag(raw: &str) -> ParseResult<Tag> {
    Ok(Tag::new(raw.trim())?)
}

/// Parse every tag value; duplicates collapse into one tag.
pub fn parse_tags<S: AsRef<str>>(raw: &[S]) -> ParseResult<BTreeSet<Tag>> {
    raw.iter().map(|tag| parse_tag(tag.as_ref())).collect()
}
