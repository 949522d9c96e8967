//! Date labels for the dashboard.

use chrono::{NaiveDate, NaiveDateTime};

/// Format an ISO date (`2024-03-05`, or a timestamp starting with one) as a
/// short month/day label: `"Mar 5"`.
///
/// Returns `None` when the input does not start with a valid date.
pub fn date_to_words(date: &str) -> Option<String> {
    let date = parse_date(date)?;
    Some(date.format("%b %-d").to_string())
}

/// Format the API's local timestamp (`2024-03-05 9:41`) as
/// `"Tuesday, Mar 5 09:41"`. Falls back to the raw text when it can't be parsed.
pub fn format_local_time(localtime: &str) -> String {
    match NaiveDateTime::parse_from_str(localtime.trim(), "%Y-%m-%d %H:%M") {
        Ok(dt) => dt.format("%A, %b %-d %H:%M").to_string(),
        Err(_) => localtime.to_string(),
    }
}

/// Extract `HH:MM` from an hourly timestamp such as `2024-03-05 03:00`.
pub fn hour_label(time: &str) -> Option<String> {
    NaiveDateTime::parse_from_str(time.trim(), "%Y-%m-%d %H:%M")
        .ok()
        .map(|dt| dt.format("%H:%M").to_string())
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    let head = text.trim().get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
