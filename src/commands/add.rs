//! Add command: appends a new record to the record book.

use super::CommandOutcome;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use crate::repositories::RecordRepository;
use tracing::debug;

/// Adds a record unless the record book already holds the same record.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    to_add: Record,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";

    pub const MESSAGE_USAGE: &'static str = "add: Adds a record to the record book. \
        Parameters: name/NAME p/PHONE e/EMAIL address/ADDRESS gender/GENDER \
        graduationDate/GRADUATION DATE cap/CAP university/UNIVERSITY major/MAJOR \
        jobId/ID jobTitle/TITLE [tag/TAG]...\n\
        Example: add name/John Doe p/98765432 e/johnd@example.com \
        address/311, Clementi Ave 2, #02-25 gender/male graduationDate/05-2024 \
        cap/3.50/4.00 university/Nanyang Polytechnic major/Computer Science \
        jobId/173296 jobTitle/Software Engineer Intern tag/rejected tag/KIV";

    pub fn new(record: Record) -> Self {
        Self { to_add: record }
    }

    pub fn record(&self) -> &Record {
        &self.to_add
    }

    pub fn execute(&self, repository: &mut dyn RecordRepository) -> CommandResult<CommandOutcome> {
        if repository.has_record(&self.to_add) {
            debug!("Rejected duplicate record for {}", self.to_add.person().name());
            return Err(CommandError::DuplicateRecord);
        }

        repository.add_record(self.to_add.clone())?;
        Ok(CommandOutcome::new(format!("New record added: {}", self.to_add)))
    }
}
