//! Test fixtures and sample data.
//!
//! Provides a record builder plus a small book of typical records.

use applicant_records::domain::{
    Address, Cap, Email, Gender, GraduationDate, JobId, JobTitle, Major, Name, Phone, Tag,
    University,
};
use applicant_records::{Record, RecordBook};

/// Builds records field by field, starting from Amy Bee's details.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    name: String,
    phone: String,
    email: String,
    address: String,
    gender: String,
    graduation_date: String,
    cap: (f64, f64),
    university: String,
    major: String,
    job_id: String,
    job_title: String,
    tags: Vec<String>,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self {
            name: "Amy Bee".to_string(),
            phone: "85355255".to_string(),
            email: "amy@gmail.com".to_string(),
            address: "123, Jurong West Ave 6, #08-111".to_string(),
            gender: "Female".to_string(),
            graduation_date: "05-2024".to_string(),
            cap: (4.2, 5.0),
            university: "NUS".to_string(),
            major: "Computer Science".to_string(),
            job_id: "167839".to_string(),
            job_title: "Software Engineer Intern".to_string(),
            tags: Vec::new(),
        }
    }
}

#[allow(dead_code)]
impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing record.
    pub fn from_record(record: &Record) -> Self {
        let person = record.person();
        Self {
            name: person.name().to_string(),
            phone: person.phone().to_string(),
            email: person.email().to_string(),
            address: person.address().to_string(),
            gender: person.gender().to_string(),
            graduation_date: person.graduation_date().to_string(),
            cap: (person.cap().value(), person.cap().maximum()),
            university: person.university().to_string(),
            major: person.major().to_string(),
            job_id: record.job().id().to_string(),
            job_title: record.job().title().to_string(),
            tags: record.tags().iter().map(|t| t.as_str().to_string()).collect(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn gender(mut self, gender: &str) -> Self {
        self.gender = gender.to_string();
        self
    }

    pub fn graduation_date(mut self, date: &str) -> Self {
        self.graduation_date = date.to_string();
        self
    }

    pub fn cap(mut self, value: f64, maximum: f64) -> Self {
        self.cap = (value, maximum);
        self
    }

    pub fn university(mut self, university: &str) -> Self {
        self.university = university.to_string();
        self
    }

    pub fn major(mut self, major: &str) -> Self {
        self.major = major.to_string();
        self
    }

    pub fn job_id(mut self, id: &str) -> Self {
        self.job_id = id.to_string();
        self
    }

    pub fn job_title(mut self, title: &str) -> Self {
        self.job_title = title.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn build(self) -> Record {
        Record::new(
            Name::new(self.name).unwrap(),
            Phone::new(self.phone).unwrap(),
            Email::new(self.email).unwrap(),
            Address::new(self.address).unwrap(),
            Gender::new(self.gender).unwrap(),
            GraduationDate::new(self.graduation_date).unwrap(),
            Cap::new(self.cap.0, self.cap.1).unwrap(),
            University::new(self.university).unwrap(),
            Major::new(self.major).unwrap(),
            JobId::new(self.job_id).unwrap(),
            JobTitle::new(self.job_title).unwrap(),
            self.tags.into_iter().map(|t| Tag::new(t).unwrap()).collect(),
        )
    }
}

#[allow(dead_code)]
pub fn alice() -> Record {
    RecordBuilder::new()
        .name("Alice Pauline")
        .phone("94351253")
        .email("alice@example.com")
        .address("123, Jurong West Ave 6, #08-111")
        .major("Computer Science")
        .tags(&["friends"])
        .build()
}

#[allow(dead_code)]
pub fn benson() -> Record {
    RecordBuilder::new()
        .name("Benson Meier")
        .phone("98765432")
        .email("johnd@example.com")
        .address("311, Clementi Ave 2, #02-25")
        .gender("Male")
        .cap(3.8, 5.0)
        .major("Business Analytics")
        .job_id("J9204342")
        .job_title("Backend Engineer Intern")
        .tags(&["owesMoney", "friends"])
        .build()
}

#[allow(dead_code)]
pub fn carl() -> Record {
    RecordBuilder::new()
        .name("Carl Kurz")
        .phone("95352563")
        .email("heinz@example.com")
        .address("wall street")
        .gender("Male")
        .graduation_date("12-2023")
        .cap(4.5, 5.0)
        .university("NTU")
        .major("Computer Engineering")
        .job_id("173296")
        .job_title("Data Analyst Intern")
        .build()
}

/// A record book holding alice, benson and carl, in that order.
#[allow(dead_code)]
pub fn typical_record_book() -> RecordBook {
    RecordBook::from_records(vec![alice(), benson(), carl()]).unwrap()
}

/// The `add` arguments for John Doe, without the command word.
#[allow(dead_code)]
pub const JOHN_DOE_ARGS: &str = "name/John Doe p/98765432 e/johnd@example.com \
    address/311, Clementi Ave 2, #02-25 gender/Male graduationDate/05-2024 \
    cap/3.5/4 university/NUS major/Computer Science jobId/173296 \
    jobTitle/Software Engineer Intern tag/rejected tag/KIV";
