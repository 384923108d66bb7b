//! Configuration management for the applicant record manager.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read first if present; it never
//! overrides variables that are already set.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the record book file.
pub const DEFAULT_RECORDS_FILE_PATH: &str = "data/records.json";

/// Configuration for the applicant record manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Record book file (default: "data/records.json")
    pub records_file_path: PathBuf,

    /// Save after every command that changes the record book (default: true).
    /// When off, the record book is saved once on exit.
    pub autosave: bool,

    /// Log level used when RUST_LOG is not set (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `RECORDS_FILE_PATH`: Record book file (default: "data/records.json")
    /// - `AUTOSAVE`: `true` or `false` (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let records_file_path = match env::var("RECORDS_FILE_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "RECORDS_FILE_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_RECORDS_FILE_PATH),
        };

        let autosave = Self::parse_env_bool("AUTOSAVE", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            records_file_path,
            autosave,
            log_level,
        })
    }

    /// Parse an environment variable as a bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            records_file_path: PathBuf::from(DEFAULT_RECORDS_FILE_PATH),
            autosave: true,
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 3] = ["RECORDS_FILE_PATH", "AUTOSAVE", "LOG_LEVEL"];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.records_file_path, PathBuf::from("data/records.json"));
        assert!(config.autosave);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let _guard = EnvGuard::new();

        let config = Config::from_env().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("RECORDS_FILE_PATH", "/tmp/applicants.json");
        guard.set("AUTOSAVE", "false");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.records_file_path, PathBuf::from("/tmp/applicants.json"));
        assert!(!config.autosave);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_empty_file_path() {
        let mut guard = EnvGuard::new();
        guard.set("RECORDS_FILE_PATH", "  ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "RECORDS_FILE_PATH"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_autosave() {
        let mut guard = EnvGuard::new();
        guard.set("AUTOSAVE", "sometimes");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, reason }) => {
                assert_eq!(var, "AUTOSAVE");
                assert_eq!(reason, "Must be true or false, got: sometimes");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL", "Yes");

        assert!(Config::parse_env_bool("TEST_BOOL", false).unwrap());
        assert!(!Config::parse_env_bool("NONEXISTENT_BOOL", false).unwrap());
    }
}
