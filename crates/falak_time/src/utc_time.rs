//! UTC calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the instant type consumed by the solar-time
//! converter. Unlike civil clock readings it carries no offset.

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Build from seconds since 1970-01-01T00:00:00Z.
    pub fn from_unix_seconds(unix_s: f64) -> Self {
        let days = (unix_s / SECONDS_PER_DAY).floor();
        let seconds_of_day = unix_s - days * SECONDS_PER_DAY;
        let (year, month, day_frac) = jd_to_calendar(UNIX_EPOCH_JD + days);
        let hour = (seconds_of_day / 3600.0).floor() as u32;
        let minute = ((seconds_of_day % 3600.0) / 60.0).floor() as u32;
        let second = seconds_of_day % 60.0;
        Self {
            year,
            month,
            day: day_frac.round() as u32,
            hour,
            minute,
            second,
        }
    }

    /// Read the system clock.
    pub fn now() -> Result<Self, TimeError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| TimeError::SystemClock(e.to_string()))?;
        Ok(Self::from_unix_seconds(elapsed.as_secs_f64()))
    }

    /// The UTC calendar date of this instant.
    pub fn date(&self) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Hour of day as a decimal, e.g. 13:30:00 → 13.5.
    pub fn decimal_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }

    /// Julian Date (UTC) of this instant.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64) + self.decimal_hours() / 24.0
    }

    /// Check that every field is in range for a real instant.
    pub fn validate(&self) -> Result<(), TimeError> {
        CalendarDate::new(self.year, self.month, self.day)?;
        if self.hour > 23 || self.minute > 59 || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidTime(format!(
                "{:02}:{:02}:{}",
                self.hour, self.minute, self.second
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm:ssZ` (fractional seconds allowed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || TimeError::Parse(format!("expected YYYY-MM-DDThh:mm:ssZ, got {s:?}"));
        let body = s.trim().strip_suffix('Z').ok_or_else(parse_err)?;
        let (date_part, time_part) = body.split_once('T').ok_or_else(parse_err)?;
        let date: CalendarDate = date_part.parse()?;

        let mut fields = time_part.splitn(3, ':');
        let hour = fields
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(parse_err)?;
        let minute = fields
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(parse_err)?;
        let second = fields
            .next()
            .and_then(|p| p.parse::<f64>().ok())
            .ok_or_else(parse_err)?;

        if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidTime(time_part.to_string()));
        }
        Ok(Self::new(date.year, date.month, date.day, hour, minute, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = UtcTime::new(2024, 1, 15, 12, 30, 45.123);
        let s = t.to_string();
        assert!(s.contains("12:30:"), "got: {s}");
    }

    #[test]
    fn decimal_hours() {
        let t = UtcTime::new(2024, 3, 20, 13, 30, 36.0);
        assert!((t.decimal_hours() - 13.51).abs() < 1e-12);
    }

    #[test]
    fn unix_epoch_is_1970() {
        let t = UtcTime::from_unix_seconds(0.0);
        assert_eq!(t.to_string(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn unix_seconds_known_instant() {
        // 2024-03-20T03:06:00Z
        let t = UtcTime::from_unix_seconds(1_710_903_960.0);
        assert_eq!((t.year, t.month, t.day), (2024, 3, 20));
        assert_eq!((t.hour, t.minute), (3, 6));
        assert!(t.second.abs() < 1e-9);
    }

    #[test]
    fn parse_round_trip() {
        let t: UtcTime = "2024-03-20T05:00:00Z".parse().unwrap();
        assert_eq!(t, UtcTime::new(2024, 3, 20, 5, 0, 0.0));
        assert_eq!(t.to_string(), "2024-03-20T05:00:00Z");
    }

    #[test]
    fn parse_rejects_missing_zone() {
        assert!("2024-03-20T05:00:00".parse::<UtcTime>().is_err());
    }

    #[test]
    fn parse_rejects_hour_24() {
        assert!(matches!(
            "2024-03-20T24:00:00Z".parse::<UtcTime>(),
            Err(TimeError::InvalidTime(_))
        ));
    }

    #[test]
    fn validate_checks_every_field() {
        assert!(UtcTime::new(2024, 2, 29, 23, 59, 59.5).validate().is_ok());
        assert!(matches!(
            UtcTime::new(2023, 2, 29, 0, 0, 0.0).validate(),
            Err(TimeError::InvalidDate { .. })
        ));
        assert!(UtcTime::new(2024, 1, 1, 0, 60, 0.0).validate().is_err());
        assert!(UtcTime::new(2024, 1, 1, 0, 0, f64::NAN).validate().is_err());
    }

    #[test]
    fn jd_matches_calendar() {
        let t = UtcTime::new(2000, 1, 1, 12, 0, 0.0);
        assert_eq!(t.to_jd(), crate::J2000_JD);
    }
}
