//! Data models for applicant records.
//!
//! A [`Record`] pairs a [`Person`] with the [`Job`] they applied to, plus a
//! set of tags. [`RecordPredicate`] selects which records are displayed.

pub mod job;
pub mod person;
pub mod predicate;
pub mod record;

pub use job::Job;
pub use person::Person;
pub use predicate::RecordPredicate;
pub use record::Record;
