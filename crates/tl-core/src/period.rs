//! Time periods and their validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::ClockTime;

/// Highest hour accepted on input, before any rollover adjustment.
pub const MAX_HOUR: u32 = 23;

/// Highest minute accepted on input.
pub const MAX_MINUTE: u32 = 59;

/// Errors raised while calculating a time log.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// An endpoint of a period is out of bounds or not a time at all.
    #[error("Invalid time specified in time period for {category}: {start}-{end}")]
    InvalidTimeRange {
        category: String,
        start: String,
        end: String,
    },
}

/// One tracked interval as written in the log.
///
/// Times are `H:MM` or `H` strings, in either 12-hour or 24-hour notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePeriod {
    pub category: String,
    pub start_time: String,
    pub end_time: String,
}

impl TimePeriod {
    pub fn new(
        category: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Parses and bounds-checks both endpoints.
    pub fn validate(&self) -> Result<ParsedTimePeriod<'_>, TimeError> {
        let start = parse_clock(&self.start_time);
        let end = parse_clock(&self.end_time);

        match (start, end) {
            (Some(start), Some(end)) => Ok(ParsedTimePeriod {
                category: &self.category,
                start,
                end,
            }),
            _ => Err(TimeError::InvalidTimeRange {
                category: self.category.clone(),
                start: self.start_time.clone(),
                end: self.end_time.clone(),
            }),
        }
    }
}

/// A period whose endpoints parsed within `0..=23` hours and `0..=59` minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTimePeriod<'a> {
    pub category: &'a str,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl ParsedTimePeriod<'_> {
    /// Whether either endpoint is only expressible on a 24-hour clock.
    pub const fn implies_military_time(&self) -> bool {
        is_military_hour(self.start.hour) || is_military_hour(self.end.hour)
    }
}

const fn is_military_hour(hour: u32) -> bool {
    hour > 12 || hour == 0
}

/// Parses `H:MM` or `H`. Returns `None` for anything out of range or non-numeric.
fn parse_clock(s: &str) -> Option<ClockTime> {
    let s = s.trim();
    let (hour, minute) = match s.split_once(':') {
        Some((hour, minute)) => (hour, minute),
        None => (s, "00"),
    };

    let hour: u32 = parse_digits(hour)?;
    let minute: u32 = parse_digits(minute)?;

    if hour > MAX_HOUR || minute > MAX_MINUTE {
        return None;
    }
    Some(ClockTime::new(hour, minute))
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_hours_and_minutes() {
        let period = TimePeriod::new("code", "9:05", "17:30");
        let parsed = period.validate().unwrap();
        assert_eq!(parsed.category, "code");
        assert_eq!(parsed.start, ClockTime::new(9, 5));
        assert_eq!(parsed.end, ClockTime::new(17, 30));
    }

    #[test]
    fn validate_defaults_missing_minutes() {
        let period = TimePeriod::new("code", "12", "1");
        let parsed = period.validate().unwrap();
        assert_eq!(parsed.start, ClockTime::new(12, 0));
        assert_eq!(parsed.end, ClockTime::new(1, 0));
    }

    #[test]
    fn validate_accepts_bounds() {
        assert!(TimePeriod::new("a", "0:00", "23:59").validate().is_ok());
    }

    #[test]
    fn validate_rejects_minute_out_of_range() {
        let err = TimePeriod::new("a", "1:61", "2:00").validate().unwrap_err();
        assert_eq!(
            err,
            TimeError::InvalidTimeRange {
                category: "a".to_string(),
                start: "1:61".to_string(),
                end: "2:00".to_string(),
            }
        );
    }

    #[test]
    fn validate_rejects_hour_out_of_range() {
        assert!(TimePeriod::new("a", "25:00", "2:00").validate().is_err());
        assert!(TimePeriod::new("a", "1:00", "24:00").validate().is_err());
        assert!(TimePeriod::new("a", "1:00", "2:60").validate().is_err());
    }

    #[test]
    fn validate_rejects_non_numeric() {
        for (start, end) in [("x:00", "1:00"), ("1:00", ""), ("-1:00", "2:00"), ("1:2:3", "4")] {
            assert!(
                TimePeriod::new("a", start, end).validate().is_err(),
                "{start}-{end} should be rejected"
            );
        }
    }

    #[test]
    fn error_message_names_category_and_range() {
        let err = TimePeriod::new("meetings", "1:61", "2:00")
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid time specified in time period for meetings: 1:61-2:00"
        );
    }

    #[test]
    fn military_detection_uses_both_endpoints() {
        let detect = |s: &str, e: &str| {
            TimePeriod::new("a", s, e)
                .validate()
                .unwrap()
                .implies_military_time()
        };
        assert!(!detect("12:00", "1:30"));
        assert!(detect("13:00", "1:30"));
        assert!(detect("11:00", "0:30"));
        assert!(!detect("1:00", "12:59"));
    }

    #[test]
    fn time_period_serializes_snake_case_fields() {
        let json = serde_json::to_string(&TimePeriod::new("a", "1:00", "2:00")).unwrap();
        assert_eq!(json, r#"{"category":"a","start_time":"1:00","end_time":"2:00"}"#);
    }
}
