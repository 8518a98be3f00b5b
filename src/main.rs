//! Main application entry point.
//!
//! A thin wrapper around the `fleet_tracker` library: loads `.env`, builds
//! the configuration from the environment, initializes the logger, and runs
//! the service until interrupted.

use std::process;

use anyhow::{Context, Result};

use fleet_tracker::initialization::init_logger_with;
use fleet_tracker::{run, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from a .env file if one exists; absence is
    // not an error.
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    if let Err(e) = run(config).await {
        eprintln!("fleet_tracker error: {e:#}");
        process::exit(1);
    }
    Ok(())
}
