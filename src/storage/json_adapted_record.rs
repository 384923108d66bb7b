//! JSON-friendly form of a [`Record`].

use crate::domain::{
    Address, Cap, Email, Gender, GraduationDate, JobId, JobTitle, Major, Name, Phone, Tag,
    University,
};
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// A record as it is stored on disk.
///
/// Every field is optional so that a missing or `null` field can be reported
/// by name instead of as a generic JSON error. Numbers and booleans are read
/// as their text, so `"phone": 98765432` is checked like `"98765432"`. A
/// `null` tag reads as an empty tag and fails tag validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsonAdaptedRecord {
    #[serde(deserialize_with = "scalar_as_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_as_string")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "scalar_as_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "scalar_as_string")]
    pub address: Option<String>,
    #[serde(deserialize_with = "scalar_as_string")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "scalar_as_string")]
    pub graduation_date: Option<String>,
    #[serde(deserialize_with = "scalar_as_string")]
    pub cap: Option<String>,
    #[serde(deserialize_with = "scalar_as_string")]
    pub university: Option<String>,
    #[serde(deserialize_with = "scalar_as_string")]
    pub major: Option<String>,
    #[serde(deserialize_with = "scalar_as_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "scalar_as_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalars_as_strings")]
    pub tagged: Option<Vec<String>>,
}

impl JsonAdaptedRecord {
    pub fn from_record(record: &Record) -> Self {
        let person = record.person();
        let job = record.job();

        Self {
            name: Some(person.name().to_string()),
            phone: Some(person.phone().to_string()),
            email: Some(person.email().to_string()),
            address: Some(person.address().to_string()),
            gender: Some(person.gender().to_string()),
            graduation_date: Some(person.graduation_date().to_string()),
            cap: Some(person.cap().to_string()),
            university: Some(person.university().to_string()),
            major: Some(person.major().to_string()),
            id: Some(job.id().to_string()),
            title: Some(job.title().to_string()),
            tagged: Some(
                record
                    .tags()
                    .iter()
                    .map(|tag| tag.as_str().to_string())
                    .collect(),
            ),
        }
    }

    /// Convert back into a [`Record`], reporting the first bad field.
    ///
    /// Fields are checked in the order name, phone, email, address, gender,
    /// graduationDate, cap, university, major, id, title, then tags.
    pub fn to_model_type(&self) -> StorageResult<Record> {
        let name = Name::new(required(&self.name, "Name")?)?;
        let phone = Phone::new(required(&self.phone, "Phone")?)?;
        let email = Email::new(required(&self.email, "Email")?)?;
        let address = Address::new(required(&self.address, "Address")?)?;
        let gender = Gender::new(required(&self.gender, "Gender")?)?;
        let graduation_date =
            GraduationDate::new(required(&self.graduation_date, "GraduationDate")?)?;
        let cap = required(&self.cap, "Cap")?.parse::<Cap>()?;
        let university = University::new(required(&self.university, "University")?)?;
        let major = Major::new(required(&self.major, "Major")?)?;
        let id = JobId::new(required(&self.id, "Id")?)?;
        let title = JobTitle::new(required(&self.title, "Title")?)?;
        let tags = self
            .tagged
            .iter()
            .flatten()
            .map(|tag| Tag::new(tag.as_str()))
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Record::new(
            name,
            phone,
            email,
            address,
            gender,
            graduation_date,
            cap,
            university,
            major,
            id,
            title,
            tags,
        ))
    }
}

fn required<'a>(field: &'a Option<String>, type_name: &'static str) -> StorageResult<&'a str> {
    field
        .as_deref()
        .ok_or(StorageError::MissingField(type_name))
}

fn scalar_text<E: de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(E::custom(format!("expected a text value, found {other}"))),
    }
}

fn scalar_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    scalar_text(Value::deserialize(deserializer)?)
}

fn scalars_as_strings<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    match Option::<Vec<Value>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(values) => values
            .into_iter()
            .map(|value| scalar_text(value).map(Option::unwrap_or_default))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
    }
}
