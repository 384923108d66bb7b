//! Record service layer.
//!
//! Runs one line of user input end to end: parse, execute against the
//! repository, then persist when the record book changed.

use crate::commands::CommandOutcome;
use crate::error::AppResult;
use crate::models::Record;
use crate::parser::parse_command;
use crate::repositories::{InMemoryRecordRepository, RecordBook, RecordRepository};
use crate::storage::RecordStorage;
use tracing::{debug, info, warn};

/// Record service trait for business operations.
pub trait RecordService {
    /// Parse and run one command line.
    ///
    /// When autosave is on, a command that changes the record book is saved
    /// before returning. A failed save is reported as an error but the change
    /// stays in memory.
    fn execute(&mut self, input: &str) -> AppResult<CommandOutcome>;

    /// Records currently shown to the user, in display order.
    fn displayed_records(&self) -> Vec<&Record>;

    /// Save the record book now.
    fn flush(&self) -> AppResult<()>;
}

/// Default implementation of RecordService.
pub struct RecordServiceImpl {
    repository: Box<dyn RecordRepository>,
    storage: Box<dyn RecordStorage>,
    autosave: bool,
}

impl RecordServiceImpl {
    /// Create a new RecordServiceImpl around an existing repository.
    pub fn new(
        repository: Box<dyn RecordRepository>,
        storage: Box<dyn RecordStorage>,
        autosave: bool,
    ) -> Self {
        Self {
            repository,
            storage,
            autosave,
        }
    }

    /// Create a service whose record book is loaded from `storage`.
    ///
    /// A missing file starts an empty record book. So does an unreadable or
    /// invalid one, with a warning; the bad file is overwritten on the next
    /// save.
    pub fn load(storage: Box<dyn RecordStorage>, autosave: bool) -> Self {
        let book = match storage.read_record_book() {
            Ok(Some(book)) => book,
            Ok(None) => {
                info!(
                    "No record file at {}, starting with an empty record book",
                    storage.file_path().display()
                );
                RecordBook::new()
            }
            Err(e) => {
                warn!(
                    "Record file at {} could not be loaded ({}), starting with an empty record book",
                    storage.file_path().display(),
                    e
                );
                RecordBook::new()
            }
        };

        Self::new(
            Box::new(InMemoryRecordRepository::new(book)),
            storage,
            autosave,
        )
    }

    pub fn repository(&self) -> &dyn RecordRepository {
        self.repository.as_ref()
    }
}

impl RecordService for RecordServiceImpl {
    fn execute(&mut self, input: &str) -> AppResult<CommandOutcome> {
        let command = parse_command(input)?;
        debug!("Executing {:?}", command);

        let outcome = command.execute(self.repository.as_mut())?;

        if self.autosave && command.modifies_records() {
            self.flush()?;
        }
        Ok(outcome)
    }

    fn displayed_records(&self) -> Vec<&Record> {
        self.repository.filtered_records()
    }

    fn flush(&self) -> AppResult<()> {
        self.storage
            .save_record_book(self.repository.record_book())?;
        Ok(())
    }
}
