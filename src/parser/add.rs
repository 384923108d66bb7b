//! Parser for the `add` command.

use super::cli_syntax::{
    PREFIX_ADDRESS, PREFIX_CAP, PREFIX_EMAIL, PREFIX_GENDER, PREFIX_GRADUATION_DATE,
    PREFIX_JOB_ID, PREFIX_JOB_TITLE, PREFIX_MAJOR, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG,
    PREFIX_UNIVERSITY, RECORD_PREFIXES, SINGLE_VALUED_PREFIXES,
};
use super::tokenizer::{tokenize, ArgumentMultimap};
use super::util;
use crate::commands::AddCommand;
use crate::error::{ParseError, ParseResult};
use crate::models::Record;

/// Parse the arguments of an `add` command.
pub fn parse_add(args: &str) -> ParseResult<AddCommand> {
    let multimap = tokenize(args, &RECORD_PREFIXES);

    if !multimap.are_present(&SINGLE_VALUED_PREFIXES) || !multimap.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat(
            AddCommand::MESSAGE_USAGE.to_string(),
        ));
    }
    multimap.verify_no_duplicate_prefixes_for(&SINGLE_VALUED_PREFIXES)?;

    Ok(AddCommand::new(build_record(&multimap)?))
}

fn build_record(multimap: &ArgumentMultimap) -> ParseResult<Record> {
    // presence was checked by the caller
    let value = move |prefix| multimap.value(prefix).unwrap_or_default();

    Ok(Record::new(
        util::parse_name(value(PREFIX_NAME))?,
        util::parse_phone(value(PREFIX_PHONE))?,
        util::parse_email(value(PREFIX_EMAIL))?,
        util::parse_address(value(PREFIX_ADDRESS))?,
        util::parse_gender(value(PREFIX_GENDER))?,
        util::parse_graduation_date(value(PREFIX_GRADUATION_DATE))?,
        util::parse_cap(value(PREFIX_CAP))?,
        util::parse_university(value(PREFIX_UNIVERSITY))?,
        util::parse_major(value(PREFIX_MAJOR))?,
        util::parse_job_id(value(PREFIX_JOB_ID))?,
        util::parse_job_title(value(PREFIX_JOB_TITLE))?,
        util::parse_tags(multimap.all_values(PREFIX_TAG))?,
    ))
}
