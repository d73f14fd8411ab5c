//! Istiwa (WIS): true local apparent solar time.
//!
//! Solar noon at 12:00:00 is the instant the Sun crosses the observer's
//! meridian, independent of the civil timezone.

use std::fmt::{Display, Formatter};

use falak_time::{UtcTime, wrap_hours};
use serde::Serialize;

use crate::sun::sun_position_for_date;

/// A local apparent solar time reading with whole-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SolarTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl SolarTime {
    /// Split decimal hours in [0, 24) into truncated h/m/s.
    pub fn from_decimal_hours(hours: f64) -> Self {
        let hours = wrap_hours(hours);
        let h = hours.floor();
        let minutes = (hours - h) * 60.0;
        let m = minutes.floor();
        let s = ((minutes - m) * 60.0).floor();
        Self {
            hour: h as u8,
            minute: m.min(59.0) as u8,
            second: s.min(59.0) as u8,
        }
    }
}

impl Display for SolarTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Local apparent solar time in decimal hours.
///
/// `utc + longitude/15 + eqt`, wrapped into [0, 24).
pub fn solar_time_hours(utc_hours: f64, longitude_deg: f64, eqt_hours: f64) -> f64 {
    wrap_hours(utc_hours + longitude_deg / 15.0 + eqt_hours)
}

/// Istiwa time at a UTC instant for an observer longitude.
///
/// The equation of time is taken for the instant's UTC calendar date.
pub fn istiwa_time(utc: &UtcTime, longitude_deg: f64) -> SolarTime {
    let eqt = sun_position_for_date(utc.date()).equation_of_time_hours;
    SolarTime::from_decimal_hours(solar_time_hours(utc.decimal_hours(), longitude_deg, eqt))
}
