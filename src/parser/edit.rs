//! Parser for the `edit` command.

use super::cli_syntax::{
    PREFIX_ADDRESS, PREFIX_CAP, PREFIX_EMAIL, PREFIX_GENDER, PREFIX_GRADUATION_DATE,
    PREFIX_JOB_ID, PREFIX_JOB_TITLE, PREFIX_MAJOR, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG,
    PREFIX_UNIVERSITY, RECORD_PREFIXES, SINGLE_VALUED_PREFIXES,
};
use super::tokenizer::tokenize;
use super::util;
use crate::commands::{EditCommand, EditRecordDescriptor, TagUpdate};
use crate::error::{ParseError, ParseResult};

/// Parse the arguments of an `edit` command.
pub fn parse_edit(args: &str) -> ParseResult<EditCommand> {
    let multimap = tokenize(args, &RECORD_PREFIXES);

    let index = util::parse_index(multimap.preamble())
        .map_err(|_| ParseError::InvalidCommandFormat(EditCommand::MESSAGE_USAGE.to_string()))?;

    multimap.verify_no_duplicate_prefixes_for(&SINGLE_VALUED_PREFIXES)?;

    let descriptor = EditRecordDescriptor {
        name: multimap.value(PREFIX_NAME).map(util::parse_name).transpose()?,
        phone: multimap.value(PREFIX_PHONE).map(util::parse_phone).transpose()?,
        email: multimap.value(PREFIX_EMAIL).map(util::parse_email).transpose()?,
        address: multimap.value(PREFIX_ADDRESS).map(util::parse_address).transpose()?,
        gender: multimap.value(PREFIX_GENDER).map(util::parse_gender).transpose()?,
        graduation_date: multimap
            .value(PREFIX_GRADUATION_DATE)
            .map(util::parse_graduation_date)
            .transpose()?,
        cap: multimap.value(PREFIX_CAP).map(util::parse_cap).transpose()?,
        university: multimap
            .value(PREFIX_UNIVERSITY)
            .map(util::parse_university)
            .transpose()?,
        major: multimap.value(PREFIX_MAJOR).map(util::parse_major).transpose()?,
        job_id: multimap.value(PREFIX_JOB_ID).map(util::parse_job_id).transpose()?,
        job_title: multimap
            .value(PREFIX_JOB_TITLE)
            .map(util::parse_job_title)
            .transpose()?,
        tags: parse_tag_update(multimap.all_values(PREFIX_TAG))?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }

    Ok(EditCommand::new(index, descriptor))
}

fn parse_tag_update(values: &[String]) -> ParseResult<TagUpdate> {
    match values {
        [] => Ok(TagUpdate::Keep),
        [only] if only.is_empty() => Ok(TagUpdate::Clear),
        _ => Ok(TagUpdate::Replace(util::parse_tags(values)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Email, Phone, Tag};
    use std::num::NonZeroUsize;

    fn index(i: usize) -> NonZeroUsize {
        NonZeroUsize::new(i).unwrap()
    }

    #[test]
    fn test_parse_edit_some_fields() {
        let command = parse_edit(" 1 p/91234567 e/johndoe@example.com").unwrap();
        let expected = EditRecordDescriptor {
            phone: Some(Phone::new("91234567").unwrap()),
            email: Some(Email::new("johndoe@example.com").unwrap()),
            ..Default::default()
        };
        assert_eq!(command, EditCommand::new(index(1), expected));
    }

    #[test]
    fn test_parse_edit_invalid_preamble() {
        let usage = ParseError::InvalidCommandFormat(EditCommand::MESSAGE_USAGE.to_string());
        assert_eq!(parse_edit(" name/Amy").unwrap_err(), usage);
        assert_eq!(parse_edit(" 0 name/Amy").unwrap_err(), usage);
        assert_eq!(parse_edit(" -5 name/Amy").unwrap_err(), usage);
        assert_eq!(parse_edit(" 1 some random string").unwrap_err(), usage);
        assert_eq!(parse_edit(" 1 i/ string").unwrap_err(), usage);
    }

    #[test]
    fn test_parse_edit_nothing_edited() {
        assert_eq!(parse_edit(" 1").unwrap_err(), ParseError::NotEdited);
    }

    #[test]
    fn test_parse_edit_tags() {
        let cleared = parse_edit(" 3 tag/").unwrap();
        assert_eq!(cleared.descriptor().tags, TagUpdate::Clear);

        let replaced = parse_edit(" 3 tag/KIV tag/rejected").unwrap();
        let expected = [Tag::new("KIV").unwrap(), Tag::new("rejected").unwrap()]
            .into_iter()
            .collect();
        assert_eq!(replaced.descriptor().tags, TagUpdate::Replace(expected));

        let untouched = parse_edit(" 3 name/Amy Bee").unwrap();
        assert_eq!(untouched.descriptor().tags, TagUpdate::Keep);

        // an empty tag next to a real one is just an invalid tag
        let err = parse_edit(" 3 tag/KIV tag/").unwrap_err();
        assert_eq!(err.to_string(), Tag::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_parse_edit_repeated_prefix() {
        let err = parse_edit(" 1 p/91234567 p/98765432").unwrap_err();
        assert_eq!(err, ParseError::DuplicatePrefixes(vec!["p/".to_string()]));
    }

    #[test]
    fn test_parse_edit_invalid_value() {
        let err = parse_edit(" 1 p/911a").unwrap_err();
        assert_eq!(err.to_string(), Phone::MESSAGE_CONSTRAINTS);
    }
}
