//! Contact Vault - Main entry point
//!
//! Runs the interactive address book menu on stdin/stdout.

use anyhow::{Context, Result};
use contact_vault::{Config, Console, ContactStore};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    // Initialize logging (stderr only, stdout carries the menu)
    let fallback = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
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

    let mut store = ContactStore::new();
    if let Some(path) = config.data_file.as_ref().filter(|p| p.exists()) {
        let report = store
            .import_with_report(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        info!(
            "Loaded {} contacts from {} ({} lines skipped)",
            report.imported,
            path.display(),
            report.skipped.len()
        );
    }

    let stdin = io::stdin();
    let mut console =
        Console::new(stdin.lock(), io::stdout(), store).with_default_file(config.data_file.clone());
    console.run().context("Console I/O failed")?;

    if config.autosave {
        if let Some(path) = &config.data_file {
            console
                .store()
                .export_to(path)
                .with_context(|| format!("Failed to save {}", path.display()))?;
            info!("Saved {} contacts to {}", console.store().len(), path.display());
        }
    }

    Ok(())
}
