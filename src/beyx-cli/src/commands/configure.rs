//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up beyx CLI defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
pub fn handle(data_dir: Option<PathBuf>, share_dir: Option<PathBuf>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config)?;
        return Ok(());
    }

    if data_dir.is_none() && share_dir.is_none() {
        show_usage();
        return Ok(());
    }

    if let Some(dir) = data_dir {
        config.data_dir = Some(dir);
    }
    if let Some(dir) = share_dir {
        config.share_dir = Some(dir);
    }
    config.save()?;

    println!("Configuration updated");
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) -> Result<()> {
    match &config.data_dir {
        Some(dir) => println!("Data dir:  {}", dir.display()),
        None => println!("Data dir:  (platform default)"),
    }
    match &config.share_dir {
        Some(dir) => println!("Share dir: {}", dir.display()),
        None => println!("Share dir: (./share)"),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }

    Ok(())
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: beyx configure --data-dir DIR [--share-dir DIR]");
    println!("       beyx configure --show");
}
