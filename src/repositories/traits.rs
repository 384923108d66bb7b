use crate::error::RepositoryResult;
use crate::models::{Record, RecordPredicate};

use super::RecordBook;

/// Repository for managing applicant records.
///
/// Holds the record book plus the filter that decides which records the
/// user currently sees. Indices typed by the user refer to that filtered
/// list.
pub trait RecordRepository {
    /// The full record book.
    fn record_book(&self) -> &RecordBook;

    /// Replace the whole record book, e.g. after loading from disk.
    fn reset_record_book(&mut self, book: RecordBook);

    /// Returns true if the same record is already held.
    fn has_record(&self, record: &Record) -> bool;

    /// Append a record and show every record.
    fn add_record(&mut self, record: Record) -> RepositoryResult<()>;

    /// Replace `target` with `edited` in place.
    fn set_record(&mut self, target: &Record, edited: Record) -> RepositoryResult<()>;

    /// Remove `target`.
    fn delete_record(&mut self, target: &Record) -> RepositoryResult<()>;

    /// Records matching the current filter, in record book order.
    fn filtered_records(&self) -> Vec<&Record>;

    /// The current filter.
    fn filter(&self) -> &RecordPredicate;

    /// Change the current filter.
    fn update_filter(&mut self, predicate: RecordPredicate);
}
