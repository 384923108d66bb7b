//! Person model: the applicant half of a record.

use crate::domain::{Address, Cap, Email, Gender, GraduationDate, Major, Name, Phone, University};
use std::fmt;

/// An applicant's personal and academic details.
///
/// The derived `PartialEq` is the strong notion of equality (every field);
/// [`Person::is_same_person`] is the weak notion used for duplicate detection.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    // Identity fields
    name: Name,
    phone: Phone,
    email: Email,

    // Data fields
    address: Address,
    gender: Gender,
    graduation_date: GraduationDate,
    cap: Cap,
    university: University,
    major: Major,
}

impl Person {
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
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            gender,
            graduation_date,
            cap,
            university,
            major,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn gender(&self) -> &Gender {
        &self.gender
    }

    pub fn graduation_date(&self) -> &GraduationDate {
        &self.graduation_date
    }

    pub fn cap(&self) -> &Cap {
        &self.cap
    }

    pub fn university(&self) -> &University {
        &self.university
    }

    pub fn major(&self) -> &Major {
        &self.major
    }

    /// Returns true if both persons have the same name.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Gender: {}; Graduation Date: {}; CAP: {}; University: {}; Major: {}",
            self.name,
            self.phone,
            self.email,
            self.address,
            self.gender,
            self.graduation_date,
            self.cap,
            self.university,
            self.major
        )
    }
}
