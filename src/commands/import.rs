//! Import command: merges records from another JSON file.

use super::CommandOutcome;
use crate::error::{CommandError, CommandResult};
use crate::repositories::RecordRepository;
use crate::storage::{JsonRecordStorage, RecordStorage};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Adds every record in a JSON record file, or none of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportCommand {
    path: PathBuf,
}

impl ImportCommand {
    pub const COMMAND_WORD: &'static str = "import";

    pub const MESSAGE_USAGE: &'static str = "import: Imports records from a JSON file.\n\
        Parameters: FILE_PATH\n\
        Example: import data/records.json";

    pub const MESSAGE_SUCCESS: &'static str = "Records imported successfully";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn execute(&self, repository: &mut dyn RecordRepository) -> CommandResult<CommandOutcome> {
        if self.path.is_dir() {
            return Err(CommandError::ImportPathIsDirectory);
        }

        let incoming = JsonRecordStorage::new(&self.path)
            .read_record_book()
            .map_err(|e| {
                warn!("Import from {} failed: {}", self.path.display(), e);
                CommandError::ImportConstraintsUnsatisfied(e.to_string())
            })?
            .ok_or(CommandError::ImportFileDoesNotExist)?;

        if incoming
            .records()
            .iter()
            .any(|record| repository.has_record(record))
        {
            return Err(CommandError::ImportDuplicateRecord);
        }

        for record in incoming.records() {
            repository.add_record(record.clone())?;
        }

        info!(
            "Imported {} records from {}",
            incoming.len(),
            self.path.display()
        );
        Ok(CommandOutcome::new(Self::MESSAGE_SUCCESS))
    }
}
