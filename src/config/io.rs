//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Config;
use crate::atomic::replace_file;

impl Config {
    /// Get the global config directory path (~/.prepdeck/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".prepdeck")
    }

    /// Get the global config file path (~/.prepdeck/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from `path`, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load global configuration from ~/.prepdeck/config.toml
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::global_config_path())
    }

    /// Save configuration atomically, creating the parent directory if needed
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        replace_file(path, content.as_bytes())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Write a default config to `path`.
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    /// Returns false when an existing file was left alone.
    pub fn init_at(path: &Path, force: bool) -> Result<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        Self::default().save_to_file(path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.schedule.days_before = 7;
        config.log.level = "debug".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[schedule]\ndays_before = \"soon\"").unwrap();
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_oversized_window_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[schedule]\ndays_before = 4294967295\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("days_before"));
    }

    #[test]
    fn test_init_respects_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(Config::init_at(&path, false).unwrap());
        std::fs::write(&path, "[log]\nlevel = \"warn\"\n").unwrap();
        assert!(!Config::init_at(&path, false).unwrap());
        assert_eq!(Config::from_file(&path).unwrap().log.level, "warn");
        assert!(Config::init_at(&path, true).unwrap());
        assert_eq!(Config::from_file(&path).unwrap().log.level, "info");
    }
}
