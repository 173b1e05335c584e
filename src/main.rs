//! Contact Manager - Main entry point
//!
//! Reads `first_name,last_name,phone_number` rows from stdin, adds them to a
//! fresh manager and prints the resulting contact list as JSON on stdout.

use anyhow::{Context, Result};
use contact_manager::{import_rows, Config, ContactManager};
use std::io::{self, Read};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to keep stdout for the JSON output)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

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

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read contact rows from stdin")?;

    let mut manager = ContactManager::from_config(&config);
    let report = import_rows(&mut manager, &input);
    for failure in &report.failures {
        warn!("{}", failure);
    }

    let json = serde_json::to_string_pretty(manager.get_all_contacts())
        .context("Failed to serialize contacts")?;
    println!("{}", json);

    info!(
        "Imported {} contacts ({} rows failed)",
        report.added,
        report.failures.len()
    );
    Ok(())
}
