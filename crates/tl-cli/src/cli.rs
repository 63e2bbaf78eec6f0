//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Plain-text time log calculator.
///
/// Reads lines like `12:00-1:30 acme` and totals worked time per billing
/// code, along with the dead time between periods.
#[derive(Debug, Parser)]
#[command(name = "tl", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show worked and dead time for a log.
    Report {
        /// Log file to read, or `-` for stdin. Defaults to the configured log.
        file: Option<PathBuf>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,

        /// Date shown in the report header (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Validate a log and flag suspicious dead periods.
    ///
    /// Exits with status 2 when a dead period looks like bad data.
    Check {
        /// Log file to read, or `-` for stdin. Defaults to the configured log.
        file: Option<PathBuf>,
    },
}
