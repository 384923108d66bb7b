//! Filters for the displayed record list.

use super::Record;

/// Which records the displayed list shows.
///
/// Keyword matching is by whole word and ignores case: `alice` matches the
/// name `Alice Pauline` but `ali` does not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecordPredicate {
    /// Every record.
    #[default]
    ShowAll,

    /// Records whose person's name contains any of the keywords.
    NameContainsKeywords(Vec<String>),

    /// Records whose person's major contains any of the keywords.
    MajorContainsKeywords(Vec<String>),
}

impl RecordPredicate {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::ShowAll => true,
            Self::NameContainsKeywords(keywords) => {
                contains_any_word(record.person().name().as_str(), keywords)
            }
            Self::MajorContainsKeywords(keywords) => {
                contains_any_word(record.person().major().as_str(), keywords)
            }
        }
    }
}

fn contains_any_word(sentence: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| {
        sentence
            .split_whitespace()
            .any(|word| word.eq_ignore_ascii_case(keyword))
    })
}
