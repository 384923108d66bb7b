//! File-backed record storage.

use super::JsonSerializableRecordBook;
use crate::error::{StorageError, StorageResult};
use crate::repositories::RecordBook;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads and writes the record book.
pub trait RecordStorage {
    /// Where the record book lives.
    fn file_path(&self) -> &Path;

    /// Load the record book. `Ok(None)` means there is nothing stored yet.
    fn read_record_book(&self) -> StorageResult<Option<RecordBook>>;

    /// Persist the whole record book, replacing what was stored.
    fn save_record_book(&self, book: &RecordBook) -> StorageResult<()>;
}

/// Stores the record book as pretty-printed JSON in a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRecordStorage {
    file_path: PathBuf,
}

impl JsonRecordStorage {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.file_path.display().to_string(),
            source,
        }
    }
}

impl RecordStorage for JsonRecordStorage {
    fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_record_book(&self) -> StorageResult<Option<RecordBook>> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No record file at {}", self.file_path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book = serde_json::from_str::<JsonSerializableRecordBook>(&content)?
            .to_model_type()?;
        info!(
            "Loaded {} records from {}",
            book.len(),
            self.file_path.display()
        );
        Ok(Some(book))
    }

    fn save_record_book(&self, book: &RecordBook) -> StorageResult<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json =
            serde_json::to_string_pretty(&JsonSerializableRecordBook::from_record_book(book))?;
        fs::write(&self.file_path, json).map_err(|e| self.io_error(e))?;
        debug!(
            "Saved {} records to {}",
            book.len(),
            self.file_path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonRecordStorage::new(dir.path().join("absent.json"));
        assert!(storage.read_record_book().unwrap().is_none());
    }

    #[test]
    fn test_not_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        fs::write(&path, "not json at all").unwrap();

        let err = JsonRecordStorage::new(&path).read_record_book().unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }

    #[test]
    fn test_empty_book_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonRecordStorage::new(dir.path().join("nested").join("records.json"));

        storage.save_record_book(&RecordBook::new()).unwrap();
        assert_eq!(storage.read_record_book().unwrap(), Some(RecordBook::new()));
    }
}
