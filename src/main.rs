//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_exists` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Writing the found domains to a file or the console
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_exists::initialization::init_logger_with;
use domain_exists::output::{print_results, write_results};
use domain_exists::{run_check, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Exits non-zero with a usage message when -f is missing
    let config = Config::parse();

    if let Err(e) = config.validate() {
        eprintln!("domain_exists error: {e}");
        process::exit(1);
    }

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let output = config.output.clone();

    let report = match run_check(config).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("domain_exists error: {:#}", e);
            process::exit(1);
        }
    };

    match output {
        Some(path) => match write_results(&path, &report.found) {
            Ok(()) => println!("Results written to {}", path.display()),
            // The check itself succeeded, so the exit status stays zero
            Err(e) => eprintln!("Error writing to file: {e}"),
        },
        None => {
            if let Err(e) = print_results(&report.found) {
                eprintln!("Error writing results: {e}");
            }
        }
    }

    Ok(())
}
