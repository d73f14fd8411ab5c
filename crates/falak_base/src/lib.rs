//! Solar calculations for Islamic timekeeping built on a low-precision
//! solar ephemeris.
//!
//! This crate provides:
//! - Sun declination and equation of time for a calendar date
//! - Daily prayer schedule (Imsak through Isya) from hour angles
//! - Qibla bearing toward a configurable reference point
//! - Istiwa (local apparent solar) time
//! - A reference table of Indonesian cities
//!
//! All functions are pure and use `f64` throughout.

pub mod cities;
pub mod error;
pub mod istiwa;
pub mod location;
pub mod prayer;
pub mod prayer_types;
pub mod qibla;
pub mod sun;
pub mod util;

pub use cities::{City, find_city, indonesian_cities};
pub use error::BaseError;
pub use istiwa::{SolarTime, istiwa_time, solar_time_hours};
pub use location::{DEFAULT_COORDINATE, GeoCoordinate, indonesian_timezone};
pub use prayer::{
    ashar_altitude_deg, compute_prayer_schedule, hour_angle_hours, prayer_schedule_from_sun,
    solar_noon_hours,
};
pub use prayer_types::{Prayer, PrayerConfig, PrayerSchedule, format_clock};
pub use qibla::{
    ALIGNMENT_TOLERANCE_DEG, QiblaBearing, ReferencePoint, is_aligned, qibla_bearing,
};
pub use sun::{SunPosition, sun_position, sun_position_for_date};
pub use util::{Dms, deg_to_dms, dms_to_deg, normalize_180, normalize_360, parse_dms};
