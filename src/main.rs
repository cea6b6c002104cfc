//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `private_address_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing one verdict per target
//!
//! Exit status: 0 when every target is public, 2 when any target is private
//! or reserved, 1 when a target could not be checked.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use private_address_check::config::{Opt, EXIT_CHECK_FAILED};
use private_address_check::initialization::init_logger_with;
use private_address_check::{run_checks, Config, OutputFormat, SystemResolver};

fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::from(Opt::parse());

    // Initialize logger based on config
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_checks(&config, &SystemResolver) {
        Ok(report) => {
            for outcome in &report.outcomes {
                match config.output {
                    OutputFormat::Plain => println!("{}", outcome.to_plain_line()),
                    OutputFormat::Json => println!("{}", outcome.to_json_line()),
                }
            }
            process::exit(report.exit_code());
        }
        Err(e) => {
            eprintln!("private_address_check error: {:#}", e);
            process::exit(EXIT_CHECK_FAILED);
        }
    }
}
