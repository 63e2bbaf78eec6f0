//! Display formatting for minute counts.

/// Formats minutes as `H:MM`. Hours are not wrapped, so 1500 is `25:00`.
pub fn minutes_to_clock_string(minutes: i64) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Rounds hours to the nearest quarter hour, formatted to two decimals.
pub fn round_nearest_quarter(hours: f64) -> String {
    format!("{:.2}", (hours * 4.0).round() / 4.0)
}

/// Formats minutes as decimal hours rounded to the quarter hour.
///
/// When rounding changed the value the exact figure follows, e.g.
/// `1.00 hrs - 0.92 hrs before rounding`.
#[allow(clippy::cast_precision_loss)]
pub fn minutes_to_decimal_hours(minutes: i64) -> String {
    let hours = minutes as f64 / 60.0;
    let exact = format!("{hours:.2}");
    let rounded = round_nearest_quarter(hours);

    if rounded == exact {
        format!("{rounded} hrs")
    } else {
        format!("{rounded} hrs - {exact} hrs before rounding")
    }
}

/// Clock and decimal forms together: `1:30 (1.50 hrs)`.
pub fn time_display(minutes: i64) -> String {
    format!(
        "{} ({})",
        minutes_to_clock_string(minutes),
        minutes_to_decimal_hours(minutes)
    )
}
