//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Cannot read schedule file {path}: {source}")]
    ScheduleIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid YAML schedule: {0}")]
    ScheduleYaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON schedule: {0}")]
    ScheduleJson(#[from] serde_json::Error),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Schedule file has unsupported extension (expected .yaml, .yml, or .json): {0}")]
    UnsupportedScheduleFormat(PathBuf),

    #[error("Schedule file does not exist: {0}")]
    ScheduleFileMissing(PathBuf),
}
