//! Time helpers — calendar-day boundaries and display formatting
//!
//! Day counters are keyed by plain calendar date (YYYY-MM-DD); all
//! timestamps elsewhere are `i64` Unix millis.

use chrono::{NaiveDate, Utc};
use shared::AppError;

use super::error::AppResult;

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Today's calendar date as YYYY-MM-DD
pub fn today_string() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Calendar date for a Unix-millis timestamp, as YYYY-MM-DD
pub fn date_string_for_millis(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .unwrap_or_default()
        .date_naive()
        .format("%Y-%m-%d")
        .to_string()
}

/// Whether stored day counters are stale and must be zeroed before use
///
/// Pure on its inputs so the day-boundary rule is testable without the wall
/// clock: counters reset exactly when the stored date differs from today.
pub fn should_reset_counters(stored_date: &str, today: &str) -> bool {
    stored_date != today
}

/// Format a duration in seconds as `h:mm:ss` (or `mm:ss` under an hour)
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{:02}:{:02}", m, s)
    }
}
