//! Job model: the opening a record's applicant applied to.

use crate::domain::{JobId, JobTitle};
use std::fmt;

/// A job opening. Derived `PartialEq` compares ID and title;
/// [`Job::is_same_job`] compares the ID only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Job {
    id: JobId,
    title: JobTitle,
}

impl Job {
    pub fn new(id: JobId, title: JobTitle) -> Self {
        Self { id, title }
    }

    pub fn id(&self) -> &JobId {
        &self.id
    }

    pub fn title(&self) -> &JobTitle {
        &self.title
    }

    /// Returns true if both jobs have the same ID.
    pub fn is_same_job(&self, other: &Job) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; Job Title: {}", self.id, self.title)
    }
}
