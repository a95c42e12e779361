//! Date and time pattern used by deadlines and events.
//!
//! The parser only cuts the date text out of a line. Whether that text is a
//! real `dd/MM/yyyy HH:mm` date is checked here, when someone needs to know.

use chrono::NaiveDateTime;

/// `chrono` format string for `dd/MM/yyyy HH:mm`.
pub const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Human-readable form of [`DATE_TIME_FORMAT`].
pub const DATE_TIME_PATTERN: &str = "dd/MM/yyyy HH:mm";

/// Parse a task date such as `22/08/2024 16:00`.
///
/// Returns `None` if the text does not follow the pattern or is not a real
/// calendar date.
#[must_use]
pub fn parse_task_datetime(input: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), DATE_TIME_FORMAT).ok()
}

/// Format a datetime back into the task date pattern.
#[must_use]
pub fn format_task_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format(DATE_TIME_FORMAT).to_string()
}
