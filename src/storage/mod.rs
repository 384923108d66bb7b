//! JSON persistence for the record book.

mod json_adapted_record;
mod json_record_book;
mod json_record_storage;

pub use json_adapted_record::JsonAdaptedRecord;
pub use json_record_book::JsonSerializableRecordBook;
pub use json_record_storage::{JsonRecordStorage, RecordStorage};
