//! In-memory record repository.

use super::{RecordBook, RecordRepository};
use crate::error::RepositoryResult;
use crate::models::{Record, RecordPredicate};
use tracing::debug;

/// Record repository backed by an in-memory [`RecordBook`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordRepository {
    book: RecordBook,
    filter: RecordPredicate,
}

impl InMemoryRecordRepository {
    pub fn new(book: RecordBook) -> Self {
        Self {
            book,
            filter: RecordPredicate::ShowAll,
        }
    }
}

impl RecordRepository for InMemoryRecordRepository {
    fn record_book(&self) -> &RecordBook {
        &self.book
    }

    fn reset_record_book(&mut self, book: RecordBook) {
        debug!("Replacing record book with {} records", book.len());
        self.book = book;
    }

    fn has_record(&self, record: &Record) -> bool {
        self.book.contains(record)
    }

    fn add_record(&mut self, record: Record) -> RepositoryResult<()> {
        self.book.add(record)?;
        self.filter = RecordPredicate::ShowAll;
        Ok(())
    }

    fn set_record(&mut self, target: &Record, edited: Record) -> RepositoryResult<()> {
        self.book.set(target, edited)
    }

    fn delete_record(&mut self, target: &Record) -> RepositoryResult<()> {
        self.book.remove(target).map(|_| ())
    }

    fn filtered_records(&self) -> Vec<&Record> {
        self.book
            .records()
            .iter()
            .filter(|record| self.filter.matches(record))
            .collect()
    }

    fn filter(&self) -> &RecordPredicate {
        &self.filter
    }

    fn update_filter(&mut self, predicate: RecordPredicate) {
        self.filter = predicate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Address, Cap, Email, Gender, GraduationDate, JobId, JobTitle, Major, Name, Phone,
        University,
    };
    use std::collections::BTreeSet;

    fn record(name: &str, major: &str) -> Record {
        Record::new(
            Name::new(name).unwrap(),
            Phone::new("94351253").unwrap(),
            Email::new("alice@example.com").unwrap(),
            Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
            Gender::new("Female").unwrap(),
            GraduationDate::new("05-2024").unwrap(),
            Cap::new(4.2, 5.0).unwrap(),
            University::new("NUS").unwrap(),
            Major::new(major).unwrap(),
            JobId::new("167839").unwrap(),
            JobTitle::new("Software Engineer Intern").unwrap(),
            BTreeSet::new(),
        )
    }

    #[test]
    fn test_filtered_records_follow_filter() {
        let book = RecordBook::from_records(vec![
            record("Alice Pauline", "Computer Science"),
            record("Benson Meier", "Business Analytics"),
        ])
        .unwrap();
        let mut repo = InMemoryRecordRepository::new(book);
        assert_eq!(repo.filtered_records().len(), 2);

        repo.update_filter(RecordPredicate::MajorContainsKeywords(vec![
            "business".to_string(),
        ]));
        let shown = repo.filtered_records();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].person().name().as_str(), "Benson Meier");
    }

    #[test]
    fn test_add_record_shows_all() {
        let mut repo = InMemoryRecordRepository::default();
        repo.update_filter(RecordPredicate::NameContainsKeywords(vec!["nobody".to_string()]));

        repo.add_record(record("Alice Pauline", "Computer Science")).unwrap();
        assert_eq!(repo.filter(), &RecordPredicate::ShowAll);
        assert_eq!(repo.filtered_records().len(), 1);
    }
}
