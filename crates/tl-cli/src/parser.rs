//! Time log line parsing.
//!
//! A time log is free text where some lines record a period and the lines
//! after it describe what was done:
//!
//! ```text
//! 12:00-1:30 acme
//! //- Reviewed the billing PR
//! 1:30-2:30 internal
//! ```
//!
//! Lines that are neither a period nor a task note are ignored.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tl_core::TimePeriod;

/// Pre-compiled regex for period lines: `start-end category`.
static TIME_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}(:[0-9]{2})?)-([0-9]{1,2}(:[0-9]{2})?) (.*)").unwrap());

/// Errors from reading a time log.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("could not parse times from line: {line}")]
    UnparseableLine { line: String },

    #[error("line {line_number}: times must come before tasks")]
    TaskBeforeTime { line_number: usize },
}

/// The pieces of a single period line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTimes {
    pub start_time: String,
    pub end_time: String,
    pub task_code: String,
}

/// Everything recorded against one category, in the order it was written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryLog {
    pub category: String,
    /// Raw range tokens as written, e.g. `12:00-1:30`.
    pub time_periods: Vec<String>,
    pub tasks: Vec<String>,
}

/// A parsed time log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeLog {
    /// Categories in order of first appearance.
    pub categories: Vec<CategoryLog>,
    /// Every period in the order written.
    pub periods: Vec<TimePeriod>,
}

/// Returns true if `line` looks like a period line.
pub fn is_time_line(line: &str) -> bool {
    TIME_LINE_RE.is_match(line)
}

/// Splits a period line into start, end and category.
///
/// Times written without minutes get `:00`, so `12-1 acme` yields `12:00` and `1:00`.
pub fn extract_times(line: &str) -> Result<ExtractedTimes, ParseError> {
    let Some(caps) = TIME_LINE_RE.captures(line) else {
        return Err(ParseError::UnparseableLine {
            line: line.to_string(),
        });
    };

    Ok(ExtractedTimes {
        start_time: with_minutes(&caps[1], caps.get(2)),
        end_time: with_minutes(&caps[3], caps.get(4)),
        task_code: caps[5].to_string(),
    })
}

fn with_minutes(time: &str, minutes: Option<regex::Match<'_>>) -> String {
    if minutes.is_some() {
        time.to_string()
    } else {
        format!("{time}:00")
    }
}

/// Parses a whole time log.
pub fn parse_lines(source: &str) -> Result<TimeLog, ParseError> {
    let mut log = TimeLog::default();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut current: Option<usize> = None;

    for (i, line) in source.lines().map(str::trim).enumerate() {
        if is_time_line(line) {
            let times = extract_times(line)?;
            let slot = *index.entry(times.task_code.clone()).or_insert_with(|| {
                log.categories.push(CategoryLog {
                    category: times.task_code.clone(),
                    ..CategoryLog::default()
                });
                log.categories.len() - 1
            });

            let range = line.split(' ').next().unwrap_or(line);
            log.categories[slot].time_periods.push(range.to_string());
            log.periods.push(TimePeriod::new(
                times.task_code,
                times.start_time,
                times.end_time,
            ));
            current = Some(slot);
        } else if line.starts_with('/') || line.starts_with('-') {
            let Some(slot) = current else {
                return Err(ParseError::TaskBeforeTime { line_number: i + 1 });
            };
            let task = line.strip_prefix("//").unwrap_or(line);
            log.categories[slot].tasks.push(task.to_string());
        }
    }

    tracing::debug!(
        periods = log.periods.len(),
        categories = log.categories.len(),
        "parsed time log"
    );
    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "12:00-1:30 test
        //- Doing a thing
        1:30-2:30 test2
        //- Doing a different thing
        2:30-4 test
        //- Different from the first thing";

    #[test]
    fn time_line_regex_matches_period_lines() {
        assert!(is_time_line("12:30-1:15 test"));
        assert!(is_time_line("9-17 code review"));
        assert!(!is_time_line("//- notes"));
        assert!(!is_time_line("12:30 - 1:15 test"));
        assert!(!is_time_line("12:30-1:15"));
    }

    #[test]
    fn extract_times_with_minutes() {
        assert_eq!(
            extract_times("12:30-1:15 test").unwrap(),
            ExtractedTimes {
                start_time: "12:30".to_string(),
                end_time: "1:15".to_string(),
                task_code: "test".to_string(),
            }
        );
    }

    #[test]
    fn extract_times_fills_missing_minutes() {
        let times = extract_times("12-1:15 test").unwrap();
        assert_eq!(times.start_time, "12:00");
        assert_eq!(times.end_time, "1:15");

        let times = extract_times("12:30-1 test").unwrap();
        assert_eq!(times.start_time, "12:30");
        assert_eq!(times.end_time, "1:00");
    }

    #[test]
    fn extract_times_keeps_spaces_in_category() {
        assert_eq!(extract_times("9-10 code review").unwrap().task_code, "code review");
    }

    #[test]
    fn extract_times_rejects_other_lines() {
        assert_eq!(
            extract_times("lunch").unwrap_err(),
            ParseError::UnparseableLine {
                line: "lunch".to_string()
            }
        );
    }

    #[test]
    fn parse_lines_groups_by_category() {
        let log = parse_lines(SAMPLE).unwrap();

        assert_eq!(
            log.categories,
            vec![
                CategoryLog {
                    category: "test".to_string(),
                    time_periods: vec!["12:00-1:30".to_string(), "2:30-4".to_string()],
                    tasks: vec![
                        "- Doing a thing".to_string(),
                        "- Different from the first thing".to_string(),
                    ],
                },
                CategoryLog {
                    category: "test2".to_string(),
                    time_periods: vec!["1:30-2:30".to_string()],
                    tasks: vec!["- Doing a different thing".to_string()],
                },
            ]
        );
    }

    #[test]
    fn parse_lines_keeps_periods_in_written_order() {
        let log = parse_lines(SAMPLE).unwrap();
        assert_eq!(
            log.periods,
            vec![
                TimePeriod::new("test", "12:00", "1:30"),
                TimePeriod::new("test2", "1:30", "2:30"),
                TimePeriod::new("test", "2:30", "4:00"),
            ]
        );
    }

    #[test]
    fn parse_lines_ignores_free_text() {
        let log = parse_lines("Monday\n\n9-10 code\nsome prose\n- shipped it").unwrap();
        assert_eq!(log.periods.len(), 1);
        assert_eq!(log.categories[0].tasks, vec!["- shipped it"]);
    }

    #[test]
    fn non_ascii_digits_are_free_text() {
        assert!(!is_time_line("١٢-١ notes"));
        assert!(!is_time_line("１２-１ x"));

        let log = parse_lines("١٢-١ notes\n１２-１ x\n9-10 code").unwrap();
        assert_eq!(log.periods, vec![TimePeriod::new("code", "9:00", "10:00")]);
        assert!(tl_core::calculate(&log.periods).is_ok());
    }

    #[test]
    fn parse_lines_keeps_single_slash_notes() {
        let log = parse_lines("9-10 code\n/ half done").unwrap();
        assert_eq!(log.categories[0].tasks, vec!["/ half done"]);
    }

    #[test]
    fn task_before_any_time_is_an_error() {
        assert_eq!(
            parse_lines("header\n//- orphan\n9-10 code").unwrap_err(),
            ParseError::TaskBeforeTime { line_number: 2 }
        );
    }
}
