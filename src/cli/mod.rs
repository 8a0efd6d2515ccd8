//! Command line interface definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// URL trustworthiness scanner
#[derive(Parser)]
#[command(name = "trustscan", version, about)]
pub struct Cli {
    /// URL to scan (shortcut for the `scan` subcommand)
    pub url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Network timeout in seconds for certificate and WHOIS lookups
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// SQLite database URL
    #[arg(long)]
    pub db: Option<String>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a URL and persist the assessment
    Scan {
        /// URL to scan
        url: String,
    },
    /// Show a previously stored assessment by scan id
    Show {
        /// Scan id returned by a previous scan
        scan_id: i64,
    },
}
