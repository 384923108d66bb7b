//! Applicant Records - a record manager for job applicants.
//!
//! Each record pairs an applicant (name, contact details, education) with the
//! job they applied to, plus free-form tags. Records are created and changed
//! through a prefix-based command language and kept in a JSON file.
//!
//! # Architecture
//!
//! - **domain**: Validated value types (name, phone, CAP, tags, ...)
//! - **models**: Person, job and record aggregates, list filters
//! - **parser**: Command tokenizer and per-command parsers
//! - **commands**: Executable commands, including the edit descriptor
//! - **repositories**: The record book and the repository around it
//! - **storage**: JSON persistence
//! - **services**: Parse, execute and save in one step
//! - **session**: Line-by-line command loop used by the binary
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod parser;
pub mod repositories;
pub mod services;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use commands::{Command, CommandOutcome, EditRecordDescriptor, TagUpdate};
pub use config::Config;
pub use error::{AppError, CommandError, ConfigError, ParseError, StorageError};
pub use models::{Job, Person, Record, RecordPredicate};
pub use repositories::{InMemoryRecordRepository, RecordBook, RecordRepository};
pub use services::{RecordService, RecordServiceImpl};
pub use storage::{JsonRecordStorage, RecordStorage};
