//! Rollover normalization.
//!
//! Periods are assumed to be written in chronological order. Any time that
//! appears to go backwards is pushed forward by one clock cycle (24 hours on a
//! 24-hour clock, 12 on a 12-hour clock), so the whole run lands on a single
//! non-decreasing timeline where hours may exceed 23.
//!
//! On a 12-hour clock the shift is always exactly 12 hours. `5:00-6:00` could
//! mean one hour or thirteen, and without an AM/PM marker there is nothing to
//! choose between them, so every period is assumed to be shorter than 12 hours.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::clock::{ClockTime, compare_times};
use crate::period::ParsedTimePeriod;

/// Which clock the log is written in. Decided once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockMode {
    /// 24-hour notation, detected from any hour of 0 or above 12.
    Military,
    /// 12-hour notation without AM/PM markers.
    TwelveHour,
}

impl ClockMode {
    /// Detects the mode from every period in the run.
    pub fn detect<'r, 'a: 'r, I>(periods: I) -> Self
    where
        I: IntoIterator<Item = &'r ParsedTimePeriod<'a>>,
    {
        if periods.into_iter().any(|p| p.implies_military_time()) {
            Self::Military
        } else {
            Self::TwelveHour
        }
    }

    /// Hours added for one rollover.
    pub const fn rollover_hours(self) -> u32 {
        match self {
            Self::Military => 24,
            Self::TwelveHour => 12,
        }
    }

    /// Dead time at or above this many minutes is flagged as suspicious.
    pub const fn suspicious_gap_minutes(self) -> i64 {
        match self {
            Self::Military => 23 * 60,
            Self::TwelveHour => 11 * 60,
        }
    }

    pub const fn is_military(self) -> bool {
        matches!(self, Self::Military)
    }
}

/// A period placed on the run's absolute timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedPeriod<'a> {
    pub category: &'a str,
    pub start: ClockTime,
    pub end: ClockTime,
}

/// State carried from one period to the next within a single run.
///
/// A context belongs to exactly one run. Build a fresh one for every
/// calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    mode: ClockMode,
    previous_end: ClockTime,
    first_period: bool,
}

impl RunContext {
    pub const fn new(mode: ClockMode) -> Self {
        Self {
            mode,
            previous_end: ClockTime::new(0, 0),
            first_period: true,
        }
    }

    pub const fn mode(&self) -> ClockMode {
        self.mode
    }

    /// End of the last period processed, or `0:00` before the first.
    pub const fn previous_end(&self) -> ClockTime {
        self.previous_end
    }

    pub const fn is_first_period(&self) -> bool {
        self.first_period
    }

    /// Places a period on the timeline after the previous one.
    ///
    /// Does not advance the context; call [`RunContext::advance`] once the
    /// period has been accounted for.
    pub fn normalize<'a>(&self, period: &ParsedTimePeriod<'a>) -> NormalizedPeriod<'a> {
        let rollover = self.mode.rollover_hours();
        let mut start = period.start;
        let mut end = period.end;

        // 23:00-1:00 becomes 23:00-25:00; 11:00-1:00 becomes 11:00-13:00
        if compare_times(start, end) == Ordering::Greater {
            end = end.plus_hours(rollover);
            tracing::debug!(category = period.category, %start, %end, "end rolled past start");
        }

        // Previous period ended at 23:30, so 1:00-2:00 is really 25:00-26:00
        while compare_times(start, self.previous_end) == Ordering::Less {
            start = start.plus_hours(rollover);
            end = end.plus_hours(rollover);
            tracing::debug!(category = period.category, %start, %end, "period rolled past previous end");
        }

        NormalizedPeriod {
            category: period.category,
            start,
            end,
        }
    }

    /// Records `period` as the most recent one in the run.
    pub const fn advance(&mut self, period: &NormalizedPeriod<'_>) {
        self.previous_end = period.end;
        self.first_period = false;
    }
}
