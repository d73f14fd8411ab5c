//! Low-precision solar ephemeris: declination and equation of time.
//!
//! Mean-element model good to roughly 0.01° in declination and a few
//! seconds in the equation of time between 1950 and 2050.
//!
//! Sources: Astronomical Almanac, "Low precision formulas for the Sun";
//! Meeus, *Astronomical Algorithms*, ch. 25.

use falak_time::{CalendarDate, J2000_JD};
use serde::Serialize;

use crate::util::{normalize_180, normalize_360};

/// Solar coordinates for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunPosition {
    /// Days since J2000.0 (`JD - 2451545.0`).
    pub days_since_j2000: f64,
    /// Mean longitude `q` in degrees [0, 360).
    pub mean_longitude_deg: f64,
    /// Mean anomaly `g` in degrees [0, 360).
    pub mean_anomaly_deg: f64,
    /// Apparent ecliptic longitude `L` in degrees [0, 360).
    pub ecliptic_longitude_deg: f64,
    /// Obliquity of the ecliptic in degrees.
    pub obliquity_deg: f64,
    /// Right ascension in degrees [0, 360).
    pub right_ascension_deg: f64,
    /// Declination in degrees [-23.44, 23.44].
    pub declination_deg: f64,
    /// Equation of time in hours (apparent minus mean solar time).
    pub equation_of_time_hours: f64,
}

impl SunPosition {
    /// Equation of time in minutes.
    pub fn equation_of_time_minutes(&self) -> f64 {
        self.equation_of_time_hours * 60.0
    }
}

/// Compute the Sun's position at a Julian Date.
pub fn sun_position(jd: f64) -> SunPosition {
    let d = jd - J2000_JD;

    let q = normalize_360(280.459 + 0.985_647_36 * d);
    let g = normalize_360(357.529 + 0.985_600_28 * d);
    let g_rad = g.to_radians();
    // Equation of center, two terms
    let l = normalize_360(q + 1.915 * g_rad.sin() + 0.020 * (2.0 * g_rad).sin());
    let e = 23.439 - 0.000_000_36 * d;

    let (l_rad, e_rad) = (l.to_radians(), e.to_radians());
    let ra = normalize_360((e_rad.cos() * l_rad.sin()).atan2(l_rad.cos()).to_degrees());
    let decl = (e_rad.sin() * l_rad.sin()).asin().to_degrees();
    let eqt = normalize_180(q - ra) / 15.0;

    tracing::trace!(jd, decl, eqt, "sun position");

    SunPosition {
        days_since_j2000: d,
        mean_longitude_deg: q,
        mean_anomaly_deg: g,
        ecliptic_longitude_deg: l,
        obliquity_deg: e,
        right_ascension_deg: ra,
        declination_deg: decl,
        equation_of_time_hours: eqt,
    }
}

/// Sun position at 0h UT of a calendar date.
pub fn sun_position_for_date(date: CalendarDate) -> SunPosition {
    sun_position(date.to_jd())
}
