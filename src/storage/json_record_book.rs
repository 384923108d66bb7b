//! JSON-friendly form of a [`RecordBook`].

use super::JsonAdaptedRecord;
use crate::error::{StorageError, StorageResult};
use crate::repositories::RecordBook;
use serde::{Deserialize, Serialize};

/// The record book as stored on disk: a JSON array of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonSerializableRecordBook {
    records: Vec<JsonAdaptedRecord>,
}

impl JsonSerializableRecordBook {
    pub fn from_record_book(book: &RecordBook) -> Self {
        Self {
            records: book
                .records()
                .iter()
                .map(JsonAdaptedRecord::from_record)
                .collect(),
        }
    }

    /// Convert into a [`RecordBook`], failing on the first invalid record or
    /// on two records that are the same record.
    pub fn to_model_type(&self) -> StorageResult<RecordBook> {
        let records = self
            .records
            .iter()
            .map(JsonAdaptedRecord::to_model_type)
            .collect::<StorageResult<Vec<_>>>()?;

        RecordBook::from_records(records).map_err(|_| StorageError::DuplicateRecord)
    }
}
