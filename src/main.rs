//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `phone_locator` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use phone_locator::app::run;
use phone_locator::config::Cli;
use phone_locator::initialization::init_logger_with;

#[tokio::main]
async fn main() -> Result<()> {
    // OPENCAGE_API_KEY may live in .env, either here or next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    let config = cli.config();
    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    if let Err(e) = run(cli).await {
        eprintln!("phone_locator error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
