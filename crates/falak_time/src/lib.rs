//! Calendar and clock primitives shared by the falak solvers.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Day conversion
//! - `CalendarDate`, a validated civil date
//! - `UtcTime`, a UTC instant with sub-second precision
//! - `ClockTime`, an `HH:MM` wall-clock reading built from decimal hours

pub mod clock;
pub mod date;
pub mod error;
pub mod julian;
pub mod utc_time;

pub use clock::ClockTime;
pub use date::CalendarDate;
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar, wrap_hours,
};
pub use utc_time::UtcTime;
