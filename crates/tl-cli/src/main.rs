use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tl_cli::commands::{check, report, util};
use tl_cli::{Cli, Commands, Config};

/// Exit status for a log that parsed but looks like bad data.
const SUSPICIOUS_EXIT: u8 = 2;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Some(Commands::Report { file, json, date }) => {
            let source = util::read_source(file.as_deref(), &config)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            report::run(&mut stdout, &source, date, *json, config.render_options())?;
        }
        Some(Commands::Check { file }) => {
            let source = util::read_source(file.as_deref(), &config)?;
            if check::run(&mut stdout, &source)? {
                return Ok(ExitCode::from(SUSPICIOUS_EXIT));
            }
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(ExitCode::SUCCESS)
}
