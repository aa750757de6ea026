//! CLI command implementations

pub mod bookmark;
pub mod init;
pub mod progress;
pub mod schedule;
pub mod streak;

use anyhow::{Context, Result};

use prepdeck::config::Config;
use prepdeck::progress::{FileStore, ProgressStore};

/// Open the progress store named by the config
pub fn open_progress(config: &Config) -> Result<ProgressStore<FileStore>> {
    let path = config.progress_path();
    let store = FileStore::open(&path)
        .with_context(|| format!("Failed to open progress store: {}", path.display()))?;
    Ok(ProgressStore::new(store))
}
