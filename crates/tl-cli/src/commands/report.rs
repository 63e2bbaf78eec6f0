//! Report command for showing worked and dead time.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::parser::parse_lines;
use crate::report::{DateResults, RenderOptions, format_report, format_report_json};

/// Parses `source`, calculates its totals, and writes the report.
pub fn run<W: Write>(
    writer: &mut W,
    source: &str,
    date: NaiveDate,
    json: bool,
    options: RenderOptions,
) -> Result<()> {
    let log = parse_lines(source)?;
    let minutes = tl_core::calculate(&log.periods).context("failed to calculate time log")?;
    let results = DateResults::new(date, log, minutes);

    if json {
        writeln!(writer, "{}", format_report_json(&results)?)?;
    } else {
        write!(writer, "{}", format_report(&results, options))?;
    }
    Ok(())
}
