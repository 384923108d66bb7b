//! Record model: one applicant's application to one job.

use super::{Job, Person};
use crate::domain::{
    Address, Cap, Email, Gender, GraduationDate, JobId, JobTitle, Major, Name, Phone, Tag,
    University,
};
use std::collections::BTreeSet;
use std::fmt;

/// An applicant record: a [`Person`], the [`Job`] they applied to, and a set of
/// tags.
///
/// Records are immutable. Editing a record builds a new one that replaces the
/// original in the record book.
///
/// Two notions of equality exist:
/// - `PartialEq` (strong): person, job and tags all equal.
/// - [`Record::is_same_record`] (weak): same person by name and the same job by
///   ID and title. Tags are ignored. The record book never holds two records
///   that are weakly equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    person: Person,
    job: Job,
    tags: BTreeSet<Tag>,
}

impl Record {
    /// Assemble a record from already-validated fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        gender: Gender,
        graduation_date: GraduationDate,
        cap: Cap,
        university: University,
        major: Major,
        id: JobId,
        title: JobTitle,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            person: Person::new(
                name,
                phone,
                email,
                address,
                gender,
                graduation_date,
                cap,
                university,
                major,
            ),
            job: Job::new(id, title),
            tags,
        }
    }

    /// Assemble a record from its sub-aggregates.
    pub fn from_parts(person: Person, job: Job, tags: BTreeSet<Tag>) -> Self {
        Self { person, job, tags }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn job(&self) -> &Job {
        &self.job
    }

    /// Tags in name order.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns true if both records have the same person and job.
    pub fn is_same_record(&self, other: &Record) -> bool {
        self.person.is_same_person(&other.person) && self.job == other.job
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person: {}; Job ID: {}", self.person, self.job)?;
        if !self.tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{}", tag)?;
            }
        }
        Ok(())
    }
}
