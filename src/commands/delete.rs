//! Delete command.

use super::CommandOutcome;
use crate::error::{CommandError, CommandResult};
use crate::repositories::RecordRepository;
use std::num::NonZeroUsize;

/// Deletes the record at a position of the displayed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    index: NonZeroUsize,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";

    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the record identified by the \
        index number used in the displayed record list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 1";

    pub fn new(index: NonZeroUsize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> NonZeroUsize {
        self.index
    }

    pub fn execute(&self, repository: &mut dyn RecordRepository) -> CommandResult<CommandOutcome> {
        let record_to_delete = repository
            .filtered_records()
            .get(self.index.get() - 1)
            .map(|record| (*record).clone())
            .ok_or(CommandError::InvalidRecordIndex)?;

        repository.delete_record(&record_to_delete)?;
        Ok(CommandOutcome::new(format!("Deleted Record: {}", record_to_delete)))
    }
}
