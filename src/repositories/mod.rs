mod in_memory_record_repository;
mod record_book;
mod traits;

pub use in_memory_record_repository::InMemoryRecordRepository;
pub use record_book::RecordBook;
pub use traits::RecordRepository;
