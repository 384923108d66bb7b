use applicant_records::error::{StorageError, StorageResult};
use applicant_records::{RecordBook, RecordStorage};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock record storage for testing.
///
/// Keeps the saved record book in memory, tracks method calls for
/// verification, and can be told to fail every save. Clones share state, so
/// a test can hand one clone to the service and inspect the other.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockRecordStorage {
    stored: Arc<Mutex<Option<RecordBook>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    file_path: PathBuf,
}

#[allow(dead_code)]
impl MockRecordStorage {
    /// Create a new MockRecordStorage with nothing stored.
    pub fn new() -> Self {
        Self {
            stored: Arc::new(Mutex::new(None)),
            fail_saves: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            file_path: PathBuf::from("mock/records.json"),
        }
    }

    /// Create a MockRecordStorage that already holds `book`.
    pub fn with_book(book: RecordBook) -> Self {
        let storage = Self::new();
        *storage.stored.lock().unwrap() = Some(book);
        storage
    }

    /// Make every later save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// The last saved record book, if any.
    pub fn stored(&self) -> Option<RecordBook> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockRecordStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStorage for MockRecordStorage {
    fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_record_book(&self) -> StorageResult<Option<RecordBook>> {
        self.track_call("read_record_book");
        Ok(self.stored.lock().unwrap().clone())
    }

    fn save_record_book(&self, book: &RecordBook) -> StorageResult<()> {
        self.track_call("save_record_book");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io {
                path: self.file_path.display().to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }

        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
