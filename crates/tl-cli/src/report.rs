//! Report building and rendering.
//!
//! Combines the parser's per-category notes with the calculated totals and
//! renders them as text or JSON.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::Serialize;
use tl_core::{Aggregate, time_display};

use crate::parser::TimeLog;

/// Warning shown when a dead period spans nearly a whole clock cycle.
pub const SUSPICIOUS_WARNING: &str = "Please verify dead time periods as there is at least one suspiciously long dead period.\nGenerally, this is a sign of bad data.";

/// One category's line in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeCategory {
    pub category: String,
    pub time_periods: Vec<String>,
    pub tasks: Vec<String>,
    pub minutes: i64,
}

/// Everything shown for one day's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateResults {
    pub date: NaiveDate,
    pub categories: Vec<TimeCategory>,
    pub minutes: Aggregate,
}

impl DateResults {
    /// Merges calculated minutes into the log's categories, keeping their written order.
    pub fn new(date: NaiveDate, log: TimeLog, minutes: Aggregate) -> Self {
        let categories = log
            .categories
            .into_iter()
            .map(|c| TimeCategory {
                minutes: minutes.category_minutes(&c.category),
                category: c.category,
                time_periods: c.time_periods,
                tasks: c.tasks,
            })
            .collect();

        Self {
            date,
            categories,
            minutes,
        }
    }
}

/// What to include in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub warn_suspicious: bool,
    pub show_tasks: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            warn_suspicious: true,
            show_tasks: true,
        }
    }
}

/// Formats the human-readable report.
pub fn format_report(results: &DateResults, options: RenderOptions) -> String {
    let mut output = String::new();
    let minutes = &results.minutes;

    writeln!(
        output,
        "TIME TRACKING: {}",
        results.date.format("%A, %b %-d, %Y")
    )
    .unwrap();

    if results.categories.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "No time periods found.").unwrap();
        return output;
    }

    writeln!(
        output,
        "Start Time: {}  End Time: {}",
        minutes.start_time, minutes.end_time
    )
    .unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "Total working time: {}",
        time_display(minutes.total_working_minutes)
    )
    .unwrap();
    writeln!(
        output,
        "Total dead time:    {}",
        time_display(minutes.total_dead_minutes)
    )
    .unwrap();

    if !minutes.dead_periods.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "DEAD PERIODS").unwrap();
        writeln!(output, "────────────").unwrap();
        for period in &minutes.dead_periods {
            writeln!(output, "- {period}").unwrap();
        }
    }

    if options.warn_suspicious && minutes.alert_suspicious_dead_period {
        writeln!(output).unwrap();
        writeln!(output, "{SUSPICIOUS_WARNING}").unwrap();
    }

    for category in &results.categories {
        writeln!(output).unwrap();
        writeln!(
            output,
            "Billing Code: {} - {}",
            category.category,
            time_display(category.minutes)
        )
        .unwrap();
        if options.show_tasks {
            for task in &category.tasks {
                writeln!(output, "  {task}").unwrap();
            }
        }
    }

    output
}

/// Formats the report as pretty-printed JSON.
pub fn format_report_json(results: &DateResults) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
