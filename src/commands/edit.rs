//! Edit command and the sparse edit descriptor it applies.

use super::CommandOutcome;
use crate::domain::{
    Address, Cap, Email, Gender, GraduationDate, JobId, JobTitle, Major, Name, Phone, Tag,
    University,
};
use crate::error::{CommandError, CommandResult};
use crate::models::{Record, RecordPredicate};
use crate::repositories::RecordRepository;
use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use tracing::debug;

/// How an edit treats the record's tags.
///
/// `Keep` and `Clear` are distinct: `edit 1 name/X` keeps the tags while
/// `edit 1 tag/` removes them all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagUpdate {
    /// No tag prefix given.
    #[default]
    Keep,

    /// A single empty tag prefix given.
    Clear,

    /// One or more tags given; they replace the existing set.
    Replace(BTreeSet<Tag>),
}

impl TagUpdate {
    fn apply(&self, current: &BTreeSet<Tag>) -> BTreeSet<Tag> {
        match self {
            Self::Keep => current.clone(),
            Self::Clear => BTreeSet::new(),
            Self::Replace(tags) => tags.clone(),
        }
    }
}

/// The fields to change on a record. Unset fields keep the original value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditRecordDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub gender: Option<Gender>,
    pub graduation_date: Option<GraduationDate>,
    pub cap: Option<Cap>,
    pub university: Option<University>,
    pub major: Option<Major>,
    pub job_id: Option<JobId>,
    pub job_title: Option<JobTitle>,
    pub tags: TagUpdate,
}

impl EditRecordDescriptor {
    /// Returns true if at least one field is edited, counting a tag clear.
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.gender.is_some()
            || self.graduation_date.is_some()
            || self.cap.is_some()
            || self.university.is_some()
            || self.major.is_some()
            || self.job_id.is_some()
            || self.job_title.is_some()
            || self.tags != TagUpdate::Keep
    }
}

/// Build the record that results from applying `descriptor` to `original`.
///
/// Neither input is modified.
pub fn create_edited_record(original: &Record, descriptor: &EditRecordDescriptor) -> Record {
    let person = original.person();
    let job = original.job();

    Record::new(
        descriptor.name.clone().unwrap_or_else(|| person.name().clone()),
        descriptor.phone.clone().unwrap_or_else(|| person.phone().clone()),
        descriptor.email.clone().unwrap_or_else(|| person.email().clone()),
        descriptor.address.clone().unwrap_or_else(|| person.address().clone()),
        descriptor.gender.clone().unwrap_or_else(|| person.gender().clone()),
        descriptor
            .graduation_date
            .clone()
            .unwrap_or_else(|| person.graduation_date().clone()),
        descriptor.cap.unwrap_or(*person.cap()),
        descriptor
            .university
            .clone()
            .unwrap_or_else(|| person.university().clone()),
        descriptor.major.clone().unwrap_or_else(|| person.major().clone()),
        descriptor.job_id.clone().unwrap_or_else(|| job.id().clone()),
        descriptor.job_title.clone().unwrap_or_else(|| job.title().clone()),
        descriptor.tags.apply(original.tags()),
    )
}

/// Edits the record at a position of the displayed list.
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand {
    index: NonZeroUsize,
    descriptor: EditRecordDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";

    pub const MESSAGE_USAGE: &'static str = "edit: Edits the details of the record identified \
        by the index number used in the displayed record list. \
        Existing values will be overwritten by the input values.\n\
        Parameters: INDEX (must be a positive integer) [name/NAME] [p/PHONE] [e/EMAIL] \
        [address/ADDRESS] [gender/GENDER] [graduationDate/GRADUATION DATE] [cap/CAP] \
        [university/UNIVERSITY] [major/MAJOR] [jobId/ID] [jobTitle/TITLE] [tag/TAG]...\n\
        Example: edit 1 p/91234567 e/johndoe@example.com";

    /// `index` is 1-based over the displayed (filtered) record list.
    pub fn new(index: NonZeroUsize, descriptor: EditRecordDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> NonZeroUsize {
        self.index
    }

    pub fn descriptor(&self) -> &EditRecordDescriptor {
        &self.descriptor
    }

    pub fn execute(&self, repository: &mut dyn RecordRepository) -> CommandResult<CommandOutcome> {
        let record_to_edit = repository
            .filtered_records()
            .get(self.index.get() - 1)
            .map(|record| (*record).clone())
            .ok_or(CommandError::InvalidRecordIndex)?;

        let edited_record = create_edited_record(&record_to_edit, &self.descriptor);

        if !record_to_edit.is_same_record(&edited_record) && repository.has_record(&edited_record) {
            debug!("Edit of record {} would duplicate another record", self.index);
            return Err(CommandError::DuplicateRecord);
        }

        repository.set_record(&record_to_edit, edited_record.clone())?;
        repository.update_filter(RecordPredicate::ShowAll);
        Ok(CommandOutcome::new(format!("Edited Record: {}", edited_record)))
    }
}
