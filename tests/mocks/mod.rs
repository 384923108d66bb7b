//! Mock implementations for testing.

mod mock_record_storage;

#[allow(unused_imports)]
pub use mock_record_storage::MockRecordStorage;
