//! Worked and dead time aggregation.
//!
//! # Algorithm Summary
//!
//! 1. Validate every period; the first bad one aborts the run
//! 2. Detect the clock mode once from all periods
//! 3. For each period in input order: normalize it against the previous end,
//!    record the gap before it as dead time, and add its length to its category

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::clock::{ClockTime, minutes_diff};
use crate::format::minutes_to_clock_string;
use crate::normalize::{ClockMode, NormalizedPeriod, RunContext};
use crate::period::{ParsedTimePeriod, TimeError, TimePeriod};

/// Totals for one run over a time log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Clock the run was interpreted in.
    pub mode: ClockMode,

    /// Worked minutes per category.
    pub minutes_by_category: BTreeMap<String, i64>,

    /// Display start of the first period.
    pub start_time: String,

    /// Display end of the last period. Stays empty for a single-period run.
    pub end_time: String,

    /// Sum of all worked minutes.
    pub total_working_minutes: i64,

    /// Sum of all gaps between consecutive periods.
    pub total_dead_minutes: i64,

    /// Each gap as a `start-end` display range, in order.
    pub dead_periods: Vec<String>,

    /// Set when some gap is close to a full clock cycle, which usually means
    /// overlapping or mistyped periods rather than real idle time.
    pub alert_suspicious_dead_period: bool,
}

impl Aggregate {
    pub const fn new(mode: ClockMode) -> Self {
        Self {
            mode,
            minutes_by_category: BTreeMap::new(),
            start_time: String::new(),
            end_time: String::new(),
            total_working_minutes: 0,
            total_dead_minutes: 0,
            dead_periods: Vec::new(),
            alert_suspicious_dead_period: false,
        }
    }

    /// Worked minutes for `category`, or zero if it never appeared.
    pub fn category_minutes(&self, category: &str) -> i64 {
        self.minutes_by_category.get(category).copied().unwrap_or(0)
    }
}

/// Calculates worked and dead time for an ordered sequence of periods.
///
/// Validation runs over the whole sequence before any period is adjusted, so
/// an error means no partial totals were produced.
pub fn calculate(periods: &[TimePeriod]) -> Result<Aggregate, TimeError> {
    let parsed = periods
        .iter()
        .map(TimePeriod::validate)
        .collect::<Result<Vec<_>, _>>()?;

    let mode = ClockMode::detect(&parsed);
    tracing::debug!(?mode, periods = parsed.len(), "detected clock mode");

    let mut ctx = RunContext::new(mode);
    let mut aggregate = Aggregate::new(mode);
    for period in &parsed {
        add_period(&mut ctx, &mut aggregate, period);
    }

    tracing::debug!(
        working = aggregate.total_working_minutes,
        dead = aggregate.total_dead_minutes,
        "calculated time log"
    );
    Ok(aggregate)
}

/// Normalizes one period and folds it into `aggregate`, then advances `ctx`.
pub fn add_period(
    ctx: &mut RunContext,
    aggregate: &mut Aggregate,
    period: &ParsedTimePeriod<'_>,
) {
    let period = ctx.normalize(period);
    let mode = ctx.mode();

    if ctx.is_first_period() {
        aggregate.start_time = calc_real_time(mode, period.start, false);
    } else {
        record_gap(ctx, aggregate, &period);
        aggregate.end_time = calc_real_time(mode, period.end, false);
    }

    let worked = minutes_diff(period.start, period.end);
    *aggregate
        .minutes_by_category
        .entry(period.category.to_string())
        .or_insert(0) += worked;
    aggregate.total_working_minutes += worked;

    ctx.advance(&period);
}

fn record_gap(ctx: &RunContext, aggregate: &mut Aggregate, period: &NormalizedPeriod<'_>) {
    let previous_end = ctx.previous_end();
    let dead = minutes_diff(previous_end, period.start);
    if dead <= 0 {
        return;
    }

    let mode = ctx.mode();
    let range = format!(
        "{}-{}",
        calc_real_time(mode, previous_end, false),
        calc_real_time(mode, period.start, false)
    );

    if dead >= mode.suspicious_gap_minutes() {
        tracing::warn!(dead_minutes = dead, %range, "suspiciously long dead period");
        aggregate.alert_suspicious_dead_period = true;
    }

    aggregate.total_dead_minutes += dead;
    aggregate.dead_periods.push(range);
}

/// Converts a timeline position back to a clock reading.
///
/// The hour is wound back by whole cycles until it reads as a clock hour; on a
/// 12-hour clock hour zero reads as 12. With `show_days`, the number of whole
/// days since the start of the timeline is appended, e.g. `1:30(1 day)`.
pub fn calc_real_time(mode: ClockMode, time: ClockTime, show_days: bool) -> String {
    let days = if show_days {
        match time.hour / 24 {
            0 => String::new(),
            1 => "(1 day)".to_string(),
            n => format!("({n} days)"),
        }
    } else {
        String::new()
    };

    let cycle = mode.rollover_hours();
    let last_hour = if mode.is_military() { 23 } else { 12 };
    let mut hour = time.hour;
    while hour > last_hour {
        hour -= cycle;
    }
    if !mode.is_military() && hour == 0 {
        hour = 12;
    }

    let minutes = i64::from(hour) * 60 + i64::from(time.minute);
    minutes_to_clock_string(minutes) + &days
}
