//! Core logic for plain-text time logs.
//!
//! This crate turns an ordered list of time periods into totals:
//! - Validation: bounds-checking `H:MM` endpoints
//! - Normalization: resolving 12-hour vs 24-hour notation and day rollover
//! - Aggregation: worked minutes per category, dead time, suspicious gaps
//! - Formatting: clock and decimal-hour strings for reports

mod aggregate;
pub mod clock;
pub mod format;
pub mod normalize;
mod period;

pub use aggregate::{Aggregate, add_period, calc_real_time, calculate};
pub use clock::{ClockTime, compare_times, minutes_diff};
pub use format::{
    minutes_to_clock_string, minutes_to_decimal_hours, round_nearest_quarter, time_display,
};
pub use normalize::{ClockMode, NormalizedPeriod, RunContext};
pub use period::{MAX_HOUR, MAX_MINUTE, ParsedTimePeriod, TimeError, TimePeriod};
