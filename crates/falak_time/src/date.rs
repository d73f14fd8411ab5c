//! Validated Gregorian calendar dates.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// A civil calendar date (proleptic Gregorian).
///
/// The solar formulas work from the Julian Day at 0h of this date; the
/// local wall-clock reference is implied by the caller's timezone offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDate")]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Unchecked wire form; deserialization goes through `CalendarDate::new`.
#[derive(Deserialize)]
struct RawDate {
    year: i32,
    month: u32,
    day: u32,
}

impl TryFrom<RawDate> for CalendarDate {
    type Error = TimeError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl CalendarDate {
    /// Create a date, rejecting impossible month/day combinations.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Julian Date at 0h of this date.
    pub fn to_jd(self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// The calendar date containing the given Julian Date.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        Self {
            year,
            month,
            day: day_frac.floor() as u32,
        }
    }

    /// The following calendar day.
    pub fn succ(self) -> Self {
        Self::from_jd(self.to_jd() + 1.0)
    }
}

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month, 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || TimeError::Parse(format!("expected YYYY-MM-DD, got {s:?}"));
        let mut parts = s.trim().splitn(3, '-');
        let year = parts
            .next()
            .and_then(|p| p.parse::<i32>().ok())
            .ok_or_else(parse_err)?;
        let month = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(parse_err)?;
        let day = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(parse_err)?;
        Self::new(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_validates_fields() {
        let ok: CalendarDate =
            serde_json::from_str(r#"{"year":2024,"month":2,"day":29}"#).unwrap();
        assert_eq!(ok, CalendarDate::new(2024, 2, 29).unwrap());
        let bad = serde_json::from_str::<CalendarDate>(r#"{"year":2024,"month":2,"day":30}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn rejects_feb_30() {
        assert_eq!(
            CalendarDate::new(2024, 2, 30),
            Err(TimeError::InvalidDate {
                year: 2024,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn accepts_leap_day() {
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(2023, 2, 29).is_err());
        assert!(CalendarDate::new(2000, 2, 29).is_ok());
        assert!(CalendarDate::new(1900, 2, 29).is_err());
    }

    #[test]
    fn rejects_month_13_and_day_0() {
        assert!(CalendarDate::new(2024, 13, 1).is_err());
        assert!(CalendarDate::new(2024, 0, 1).is_err());
        assert!(CalendarDate::new(2024, 1, 0).is_err());
    }

    #[test]
    fn jd_round_trip() {
        let d = CalendarDate::new(2024, 3, 20).unwrap();
        assert_eq!(d.to_jd(), 2_460_389.5);
        assert_eq!(CalendarDate::from_jd(d.to_jd()), d);
        assert_eq!(CalendarDate::from_jd(d.to_jd() + 0.75), d);
    }

    #[test]
    fn succ_crosses_year_end() {
        let d = CalendarDate::new(2024, 12, 31).unwrap();
        assert_eq!(d.succ(), CalendarDate::new(2025, 1, 1).unwrap());
    }

    #[test]
    fn parse_and_display() {
        let d: CalendarDate = "2024-03-20".parse().unwrap();
        assert_eq!(d, CalendarDate::new(2024, 3, 20).unwrap());
        assert_eq!(d.to_string(), "2024-03-20");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "20-March-2024".parse::<CalendarDate>(),
            Err(TimeError::Parse(_))
        ));
        assert!(matches!(
            "2024-02-31".parse::<CalendarDate>(),
            Err(TimeError::InvalidDate { .. })
        ));
    }
}
