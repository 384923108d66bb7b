//! Splits an argument string into a preamble and prefixed values.
//!
//! In `" 1 name/John Doe p/98765432 tag/KIV"` tokenized with `name/`, `p/` and
//! `tag/`, the preamble is `1` and the values are `John Doe`, `98765432` and
//! `KIV`. A prefix is only recognised where it follows whitespace, and each
//! value runs up to the next recognised prefix, so text that looks like an
//! unrecognised prefix becomes part of the preceding value.

use super::cli_syntax::Prefix;
use crate::error::{ParseError, ParseResult};
use std::collections::HashMap;

/// Prefix → values map produced by [`tokenize`], plus the preamble.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Trimmed text before the first recognised prefix.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`, if any.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// All values given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if every prefix in `prefixes` was given at least once.
    pub fn are_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|prefix| self.value(*prefix).is_some())
    }

    /// Fails if any of `prefixes` was given more than once.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> ParseResult<()> {
        let duplicated: Vec<String> = prefixes
            .iter()
            .filter(|prefix| self.all_values(**prefix).len() > 1)
            .map(|prefix| prefix.token().to_string())
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated))
        }
    }
}

/// Tokenize `args` against the recognised `prefixes`.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| find_prefix_positions(args, *prefix))
        .collect();
    positions.sort_by_key(|(start, _)| *start);

    let preamble_end = positions.first().map(|(start, _)| *start).unwrap_or(args.len());
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.token().len();
        let value_end = positions
            .get(i + 1)
            .map(|(next, _)| *next)
            .unwrap_or(args.len());
        let value = args[value_start..value_end].trim().to_string();
        multimap.values.entry(*prefix).or_default().push(value);
    }

    multimap
}

fn find_prefix_positions(args: &str, prefix: Prefix) -> Vec<(usize, Prefix)> {
    args.match_indices(prefix.token())
        .filter(|(start, _)| {
            args[..*start]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace)
        })
        .map(|(start, _)| (start, prefix))
        .collect()
}
