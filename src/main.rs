//! Applicant record manager - Main entry point
//!
//! Reads commands from stdin, one per line, and prints feedback to stdout.
//! With autosave off, the record book is saved when the session ends.
//! Logs go to stderr.

use anyhow::Result;
use applicant_records::services::RecordServiceImpl;
use applicant_records::session::run_session;
use applicant_records::storage::JsonRecordStorage;
use applicant_records::Config;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only, stdout carries command feedback)
    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Using record file {} (autosave: {})",
        config.records_file_path.display(),
        config.autosave
    );

    let storage = JsonRecordStorage::new(&config.records_file_path);
    let mut service = RecordServiceImpl::load(Box::new(storage), config.autosave);

    let stdin = io::stdin();
    run_session(&mut service, !config.autosave, stdin.lock(), io::stdout())?;

    info!("Applicant record manager shutdown complete");
    Ok(())
}
