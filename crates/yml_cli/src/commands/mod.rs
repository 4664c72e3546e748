//! CLI command definitions.

use clap::{Parser, Subcommand};

pub mod build;
pub mod encode_days;
pub mod validate;

/// yml - build and validate YML marketplace feeds
#[derive(Parser)]
#[command(name = "yml")]
#[command(version, about = "Build and validate YML marketplace catalog feeds")]
#[command(long_about = r#"
Builds product catalogs in the YML marketplace feed format from a declarative
definition file (YAML, JSON or TOML, chosen by extension).

COMMANDS:
  build        → Validate offers and write the XML feed
  validate     → Report offers that break the feed schema rules
  encode-days  → Show how a delivery day range is encoded

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the XML feed from a catalog definition
    Build(build::BuildArgs),

    /// Validate the offers of a catalog definition
    Validate(validate::ValidateArgs),

    /// Encode a delivery day range
    #[command(name = "encode-days")]
    EncodeDays(encode_days::EncodeDaysArgs),
}
