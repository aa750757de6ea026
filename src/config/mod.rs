//! Configuration loading and management

mod io;

use std::path::PathBuf;

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::schedule::{ScheduleWindow, MAX_WINDOW_DAYS};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where progress is persisted
    #[serde(default)]
    pub storage: StorageSettings,

    /// Schedule generation window
    #[serde(default)]
    pub schedule: ScheduleWindow,

    /// Logging settings
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Progress file path (defaults to ~/.prepdeck/progress.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Default filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Reject values that would make the schedule unreasonably large
    pub fn validate(&self) -> Result<()> {
        let window = &self.schedule;
        ensure!(
            window.is_within_limit(),
            "[schedule] days_before ({}) and days_after ({}) must be at most {}",
            window.days_before,
            window.days_after,
            MAX_WINDOW_DAYS
        );
        Ok(())
    }

    /// Resolved progress file path
    pub fn progress_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(|| Self::global_config_dir().join("progress.json"))
    }
}
