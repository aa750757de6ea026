//! Init command implementation

use anyhow::Result;
use std::path::Path;
use tracing::info;

use prepdeck::config::Config;

/// Write a default config file
pub fn init_command(config_path: &Path, force: bool) -> Result<()> {
    if !Config::init_at(config_path, force)? {
        println!(
            "Config file already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    info!("Created configuration file: {}", config_path.display());
    println!("Created {}", config_path.display());
    println!(
        "Progress will be stored at {}",
        Config::default().progress_path().display()
    );
    Ok(())
}
