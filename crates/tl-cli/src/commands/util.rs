//! Shared utilities for CLI commands.

use std::path::Path;

use anyhow::{Context, Result};

use crate::Config;

/// Reads the log text from `file`, the configured default log, or stdin.
///
/// A file of `-` always means stdin.
pub fn read_source(file: Option<&Path>, config: &Config) -> Result<String> {
    let path = file.or(config.default_log.as_deref());

    match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "reading time log");
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            tracing::debug!("reading time log from stdin");
            std::io::read_to_string(std::io::stdin()).context("failed to read stdin")
        }
    }
}
