//! Check command for validating a log before billing it.

use std::io::Write;

use anyhow::{Context, Result};
use tl_core::time_display;

use crate::parser::parse_lines;
use crate::report::SUSPICIOUS_WARNING;

/// Parses and calculates `source`, writing a short summary.
///
/// Returns `true` when a suspicious dead period was found.
pub fn run<W: Write>(writer: &mut W, source: &str) -> Result<bool> {
    let log = parse_lines(source)?;
    let minutes = tl_core::calculate(&log.periods).context("failed to calculate time log")?;

    writeln!(
        writer,
        "{} periods in {} billing codes",
        log.periods.len(),
        log.categories.len()
    )?;
    writeln!(writer, "Worked: {}", time_display(minutes.total_working_minutes))?;
    writeln!(writer, "Dead:   {}", time_display(minutes.total_dead_minutes))?;

    if !minutes.alert_suspicious_dead_period {
        writeln!(writer, "ok")?;
        return Ok(false);
    }

    writeln!(writer, "Dead periods:")?;
    for period in &minutes.dead_periods {
        writeln!(writer, "- {period}")?;
    }
    writeln!(writer, "{SUSPICIOUS_WARNING}")?;
    Ok(true)
}
