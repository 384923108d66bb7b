//! The record book: an ordered list of records with no two the same record.

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::Record;

/// Records in insertion order.
///
/// Uniqueness uses [`Record::is_same_record`], so two records that differ
/// only in tags or contact details still count as duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordBook {
    records: Vec<Record>,
}

impl RecordBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record book from a list, rejecting duplicates.
    pub fn from_records(records: Vec<Record>) -> RepositoryResult<Self> {
        let mut book = Self::new();
        for record in records {
            book.add(record)?;
        }
        Ok(book)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if the book holds the same record as `record`.
    pub fn contains(&self, record: &Record) -> bool {
        self.records.iter().any(|r| r.is_same_record(record))
    }

    /// Append a record.
    pub fn add(&mut self, record: Record) -> RepositoryResult<()> {
        if self.contains(&record) {
            return Err(RepositoryError::DuplicateRecord);
        }
        self.records.push(record);
        Ok(())
    }

    /// Replace `target` with `edited`, keeping its position.
    ///
    /// `edited` may be the same record as `target`; it may not be the same
    /// record as any other entry.
    pub fn set(&mut self, target: &Record, edited: Record) -> RepositoryResult<()> {
        let position = self
            .records
            .iter()
            .position(|r| r == target)
            .ok_or(RepositoryError::RecordNotFound)?;

        if !target.is_same_record(&edited) && self.contains(&edited) {
            return Err(RepositoryError::DuplicateRecord);
        }

        self.records[position] = edited;
        Ok(())
    }

    /// Remove `target` from the book.
    pub fn remove(&mut self, target: &Record) -> RepositoryResult<Record> {
        let position = self
            .records
            .iter()
            .position(|r| r == target)
            .ok_or(RepositoryError::RecordNotFound)?;
        Ok(self.records.remove(position))
    }
}
