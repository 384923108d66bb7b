//! Error types for the applicant record manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation failures live in [`crate::domain::ValidationError`] and are
//! carried transparently by the parser and storage errors.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised while turning user input into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input does not follow the command's syntax; carries the usage text.
    #[error("Invalid command format! \n{0}")]
    InvalidCommandFormat(String),

    /// Command word is not recognised.
    #[error("Unknown command")]
    UnknownCommand(String),

    /// Index is not a positive integer.
    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex(String),

    /// An edit command supplied no fields.
    #[error("At least one field to edit must be provided.")]
    NotEdited,

    /// A single-valued prefix was given more than once.
    #[error("Multiple values specified for the following single-valued field(s): {}", .0.join(" "))]
    DuplicatePrefixes(Vec<String>),

    /// A field value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors raised while executing a command against the record book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A record with the same person and job already exists.
    #[error("This record already exists in the record book")]
    DuplicateRecord,

    /// Index is outside the displayed record list.
    #[error("The record index provided is invalid")]
    InvalidRecordIndex,

    /// Import path points at a directory.
    #[error("The path given is a directory, not a file")]
    ImportPathIsDirectory,

    /// Import path does not exist.
    #[error("The file given does not exist")]
    ImportFileDoesNotExist,

    /// Import file is unreadable, malformed, or holds invalid records.
    #[error("The file contains records that do not satisfy the constraints: {0}")]
    ImportConstraintsUnsatisfied(String),

    /// Import file holds a record already in the record book.
    #[error("The file contains records that already exist in the record book")]
    ImportDuplicateRecord,

    /// The record book refused the change.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Errors raised by the record book when its uniqueness rule would break.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The record is the same record as one already held.
    #[error("Operation would result in duplicate records")]
    DuplicateRecord,

    /// The target record is not in the record book.
    #[error("The record does not exist in the record book")]
    RecordNotFound,
}

/// Errors that can occur while loading or saving the record book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A required field is absent or null; carries the field's type name.
    #[error("Record's {0} field is missing!")]
    MissingField(&'static str),

    /// A field is present but invalid.
    #[error(transparent)]
    InvalidField(#[from] ValidationError),

    /// The file holds two records that are the same record.
    #[error("Records list contains duplicate record(s).")]
    DuplicateRecord,

    /// Reading or writing the file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for a record list.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Any failure of a single command, from parsing through persistence.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Could not save data to file: {0}")]
    Storage(#[from] StorageError),

    /// Reading commands or writing feedback failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Phone;

    #[test]
    fn test_error_display() {
        let err = ParseError::NotEdited;
        assert_eq!(err.to_string(), "At least one field to edit must be provided.");

        let err = CommandError::DuplicateRecord;
        assert_eq!(err.to_string(), "This record already exists in the record book");

        let err = StorageError::MissingField("GraduationDate");
        assert_eq!(err.to_string(), "Record's GraduationDate field is missing!");

        let err = ConfigError::InvalidValue {
            var: "AUTOSAVE".to_string(),
            reason: "Must be true or false".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for AUTOSAVE: Must be true or false");
    }

    #[test]
    fn test_validation_errors_pass_through() {
        let err: ParseError = ValidationError::InvalidPhone("911a".to_string()).into();
        assert_eq!(err.to_string(), Phone::MESSAGE_CONSTRAINTS);

        let err: StorageError = ValidationError::InvalidPhone("911a".to_string()).into();
        assert_eq!(err.to_string(), Phone::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_invalid_command_format_carries_usage() {
        let err = ParseError::InvalidCommandFormat("add: Adds a record.".to_string());
        assert_eq!(err.to_string(), "Invalid command format! \nadd: Adds a record.");
    }

    #[test]
    fn test_duplicate_prefixes_lists_fields() {
        let err = ParseError::DuplicatePrefixes(vec!["name/".to_string(), "p/".to_string()]);
        assert_eq!(
            err.to_string(),
            "Multiple values specified for the following single-valued field(s): name/ p/"
        );
    }
}
