//! Error types for calendar and clock handling.

use thiserror::Error;

/// Errors from date validation, parsing, or reading the system clock.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The year/month/day triple does not name a real Gregorian date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// A time-of-day component is out of range.
    #[error("invalid time of day: {0}")]
    InvalidTime(String),
    /// Text could not be parsed as a date or time.
    #[error("parse error: {0}")]
    Parse(String),
    /// The system clock reported a time before the Unix epoch.
    #[error("system clock error: {0}")]
    SystemClock(String),
}
