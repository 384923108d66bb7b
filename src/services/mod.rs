//! Application service layer.
//!
//! Services sit between the binary's input loop and the repository and
//! storage layers.

mod record_service;

pub use record_service::{RecordService, RecordServiceImpl};
