//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `link_parser` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use link_parser::initialization::init_logger_with;
use link_parser::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env next to the working directory (e.g. RUST_LOG)
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        eprintln!("link_parser error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
