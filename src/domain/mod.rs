//! Domain value objects and types.
//!
//! Every field of an applicant record is wrapped in a value object that is
//! validated at construction time, so an invalid name, phone number, CAP or
//! tag can never be represented in a record.

pub mod address;
pub mod cap;
pub mod email;
pub mod errors;
pub mod gender;
pub mod graduation_date;
pub mod job_id;
pub mod job_title;
pub mod major;
pub mod name;
pub mod phone;
pub mod tag;
pub mod university;

pub use address::Address;
pub use cap::Cap;
pub use email::Email;
pub use errors::ValidationError;
pub use gender::Gender;
pub use graduation_date::GraduationDate;
pub use job_id::JobId;
pub use job_title::JobTitle;
pub use major::Major;
pub use name::Name;
pub use phone::Phone;
pub use tag::Tag;
pub use university::University;
