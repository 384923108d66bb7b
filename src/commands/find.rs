//! Keyword filters over the displayed list.

use super::CommandOutcome;
use crate::error::CommandResult;
use crate::models::RecordPredicate;
use crate::repositories::RecordRepository;

/// Shows only the records matching a keyword predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: RecordPredicate,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const MAJOR_COMMAND_WORD: &'static str = "major";

    pub const MESSAGE_USAGE: &'static str = "find: Finds all records whose names contain any of \
        the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find alice bob charlie";

    pub const MAJOR_MESSAGE_USAGE: &'static str = "major: Finds all records whose majors contain \
        any of the specified keywords (case-insensitive) and displays them as a list with index \
        numbers.\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: major computer science";

    pub fn new(predicate: RecordPredicate) -> Self {
        Self { predicate }
    }

    pub fn predicate(&self) -> &RecordPredicate {
        &self.predicate
    }

    pub fn execute(&self, repository: &mut dyn RecordRepository) -> CommandResult<CommandOutcome> {
        repository.update_filter(self.predicate.clone());
        let shown = repository.filtered_records().len();
        Ok(CommandOutcome::listing(format!("{} records listed!", shown)))
    }
}
