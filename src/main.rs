//! Main application entry point (service binary).
//!
//! This is a thin wrapper around the `blockwatch` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use blockwatch::initialization::init_logger_with;
use blockwatch::{run_service, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; variables may come from the real environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run_service(cli).await {
        log::error!("FATAL ERROR: {:#}", e);
        eprintln!("blockwatch error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
