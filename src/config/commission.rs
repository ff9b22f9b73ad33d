//! Commission schedule configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::{ConfigError, ValidationError};
use crate::domain::commission::RateSchedule;

/// Configuration for the commission rate schedule.
///
/// With no overrides set, the builtin schedule is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommissionConfig {
    /// Optional path to a YAML or JSON schedule document replacing the
    /// builtin rate table.
    #[serde(default)]
    pub schedule_path: Option<PathBuf>,
}

impl CommissionConfig {
    /// Loads the configured rate schedule.
    ///
    /// Schedule documents validate on deserialization, so a returned
    /// schedule always has a well-formed tier table.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, has an
    /// unsupported extension, or fails tier-table validation.
    pub fn load_schedule(&self) -> Result<RateSchedule, ConfigError> {
        let Some(path) = &self.schedule_path else {
            return Ok(RateSchedule::standard());
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ScheduleIo {
            path: path.clone(),
            source,
        })?;

        let schedule = match extension(path) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&raw)?,
            Some("json") => serde_json::from_str(&raw)?,
            _ => {
                return Err(ValidationError::UnsupportedScheduleFormat(path.clone()).into());
            }
        };

        tracing::debug!(path = %path.display(), "loaded commission schedule override");
        Ok(schedule)
    }

    /// Validates the configuration without loading the schedule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.schedule_path {
            if !matches!(extension(path), Some("yaml") | Some("yml") | Some("json")) {
                return Err(ValidationError::UnsupportedScheduleFormat(path.clone()));
            }
            if !path.exists() {
                return Err(ValidationError::ScheduleFileMissing(path.clone()));
            }
        }
        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
