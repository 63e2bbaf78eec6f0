//! Clock time ordering and minute arithmetic.
//!
//! A [`ClockTime`] is an (hour, minute) pair. Once normalized the hour may run
//! past 23, so these values are positions on a single absolute timeline rather
//! than wall-clock readings.

use std::cmp::Ordering;
use std::fmt;

/// An (hour, minute) pair.
///
/// Ordering is lexicographic: hour first, then minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    #[must_use]
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Minutes since hour zero.
    #[must_use]
    pub fn total_minutes(self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }

    /// Shifts the hour forward, keeping the minute.
    #[must_use]
    pub const fn plus_hours(self, hours: u32) -> Self {
        Self {
            hour: self.hour + hours,
            minute: self.minute,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// Compares two clock times, hour first and then minute.
///
/// Day rollover is ignored: `23:00` is later than `1:00`.
pub fn compare_times(left: ClockTime, right: ClockTime) -> Ordering {
    left.hour
        .cmp(&right.hour)
        .then_with(|| left.minute.cmp(&right.minute))
}

/// Signed minutes from `start` to `end`.
///
/// Negative only when `end` precedes `start`, which normalized input rules out.
pub fn minutes_diff(start: ClockTime, end: ClockTime) -> i64 {
    end.total_minutes() - start.total_minutes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u32, minute: u32) -> ClockTime {
        ClockTime::new(hour, minute)
    }

    #[test]
    fn compare_orders_by_hour_then_minute() {
        assert_eq!(compare_times(t(1, 0), t(2, 0)), Ordering::Less);
        assert_eq!(compare_times(t(2, 0), t(1, 59)), Ordering::Greater);
        assert_eq!(compare_times(t(2, 15), t(2, 30)), Ordering::Less);
        assert_eq!(compare_times(t(2, 30), t(2, 15)), Ordering::Greater);
        assert_eq!(compare_times(t(2, 30), t(2, 30)), Ordering::Equal);
    }

    #[test]
    fn compare_ignores_rollover() {
        assert_eq!(compare_times(t(23, 0), t(1, 0)), Ordering::Greater);
    }

    #[test]
    fn compare_is_antisymmetric_and_transitive() {
        let times = [t(0, 0), t(0, 59), t(1, 0), t(12, 30), t(13, 0), t(25, 5)];
        for a in times {
            for b in times {
                assert_eq!(compare_times(a, b), compare_times(b, a).reverse());
                for c in times {
                    if compare_times(a, b) == Ordering::Less
                        && compare_times(b, c) == Ordering::Less
                    {
                        assert_eq!(compare_times(a, c), Ordering::Less);
                    }
                }
            }
        }
    }

    #[test]
    fn compare_agrees_with_derived_ord() {
        let times = [t(3, 10), t(3, 9), t(2, 59), t(26, 0)];
        for a in times {
            for b in times {
                assert_eq!(compare_times(a, b), a.cmp(&b));
            }
        }
    }

    #[test]
    fn minutes_diff_spans_hours() {
        assert_eq!(minutes_diff(t(12, 0), t(13, 30)), 90);
        assert_eq!(minutes_diff(t(23, 45), t(25, 15)), 90);
        assert_eq!(minutes_diff(t(2, 30), t(2, 30)), 0);
        assert_eq!(minutes_diff(t(2, 30), t(1, 30)), -60);
    }

    #[test]
    fn display_pads_minutes() {
        assert_eq!(t(9, 5).to_string(), "9:05");
        assert_eq!(t(26, 30).to_string(), "26:30");
    }
}
