//! YML feed CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Validation failure

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use yml_catalog::CatalogError;

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Build(args) => commands::build::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::EncodeDays(args) => commands::encode_days::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "yml=debug,yml_catalog=debug"
    } else if quiet {
        "error"
    } else {
        "yml=info,yml_catalog=info,warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed; keep it.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    let catalog_error = e.chain().find_map(|cause| cause.downcast_ref::<CatalogError>());

    match catalog_error {
        Some(CatalogError::InvalidOffer { .. }) => ExitCodes::VALIDATION_FAILURE,
        Some(CatalogError::UnsupportedFormat(_)) => ExitCodes::INVALID_ARGS,
        Some(_) => ExitCodes::GENERAL_ERROR,
        // The validate command reports its findings and then bails.
        None if e.to_string().contains("validation failed") => ExitCodes::VALIDATION_FAILURE,
        None => ExitCodes::GENERAL_ERROR,
    }
}
