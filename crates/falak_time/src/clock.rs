//! Wall-clock `HH:MM` readings derived from decimal hours.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// A local clock reading with minute resolution.
///
/// Ordering compares hour first, then minute, so readings within one
/// calendar day sort chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create a clock reading; `None` when out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Convert decimal hours to a clock reading.
    ///
    /// Minutes are truncated, not rounded. Values outside [0, 24) wrap
    /// to the previous or next day. Returns `None` for NaN or infinity.
    pub fn from_decimal_hours(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let mut hour = value.floor();
        let mut minute = ((value - hour) * 60.0).floor();
        if minute >= 60.0 {
            hour += 1.0;
            minute -= 60.0;
        }
        let hour = hour.rem_euclid(24.0);
        Some(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since local midnight.
    pub fn minutes_of_day(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    /// Parse `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| TimeError::Parse(format!("expected HH:MM, got {s:?}")))?;
        let hour = h
            .parse::<u8>()
            .map_err(|e| TimeError::Parse(format!("hour {h:?}: {e}")))?;
        let minute = m
            .parse::<u8>()
            .map_err(|e| TimeError::Parse(format!("minute {m:?}: {e}")))?;
        Self::new(hour, minute).ok_or_else(|| TimeError::InvalidTime(s.to_string()))
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_minutes() {
        // 4.6947 h = 4:41.68
        let t = ClockTime::from_decimal_hours(4.694_675).unwrap();
        assert_eq!(t.to_string(), "04:41");
    }

    #[test]
    fn wraps_past_midnight() {
        let t = ClockTime::from_decimal_hours(24.5).unwrap();
        assert_eq!(t.to_string(), "00:30");
    }

    #[test]
    fn wraps_negative_to_previous_day() {
        let t = ClockTime::from_decimal_hours(-0.25).unwrap();
        assert_eq!(t.to_string(), "23:45");
    }

    #[test]
    fn nan_is_none() {
        assert!(ClockTime::from_decimal_hours(f64::NAN).is_none());
        assert!(ClockTime::from_decimal_hours(f64::INFINITY).is_none());
    }

    #[test]
    fn ordering_is_chronological() {
        let a = ClockTime::new(4, 59).unwrap();
        let b = ClockTime::new(5, 0).unwrap();
        assert!(a < b);
        assert_eq!(b.minutes_of_day(), 300);
    }

    #[test]
    fn parse_and_reject() {
        assert_eq!("12:02".parse::<ClockTime>().unwrap(), ClockTime::new(12, 2).unwrap());
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("noon".parse::<ClockTime>().is_err());
    }

    #[test]
    fn serializes_as_string() {
        let t = ClockTime::new(18, 5).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"18:05\"");
        let back: ClockTime = serde_json::from_str("\"18:05\"").unwrap();
        assert_eq!(back, t);
    }
}
