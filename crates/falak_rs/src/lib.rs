//! Convenience facade for the falak engines.
//!
//! Provides the four boundary functions (prayer schedule, qibla bearing,
//! istiwa time, inheritance) with input validation, plus a [`Falak`]
//! context that carries an injected [`FalakConfig`].
//!
//! # Quick start
//!
//! ```rust
//! use falak_rs::*;
//!
//! let jakarta = GeoCoordinate::new(-6.17, 106.82, 8.0);
//! let date: CalendarDate = "2024-03-20".parse().unwrap();
//! let schedule = compute_prayer_schedule(&jakarta, 7.0, date).unwrap();
//! println!("{schedule}");
//!
//! let qibla = compute_qibla_bearing(-6.17, 106.82).unwrap();
//! println!("qibla {qibla}");
//! ```

pub mod context;
pub mod convenience;
pub mod error;

pub use context::Falak;
pub use convenience::{
    compute_inheritance, compute_prayer_schedule, compute_qibla_bearing, compute_solar_time,
};
pub use error::FalakError;

// Re-export the value types so callers only need `use falak_rs::*`.
pub use falak_base::{
    City, DEFAULT_COORDINATE, Dms, GeoCoordinate, Prayer, PrayerConfig, PrayerSchedule,
    QiblaBearing, ReferencePoint, SolarTime, SunPosition, deg_to_dms, format_clock,
    indonesian_timezone, is_aligned, parse_dms, sun_position_for_date,
};
pub use falak_config::FalakConfig;
pub use falak_time::{CalendarDate, ClockTime, UtcTime};
pub use faraid::{Distribution, FamilyComposition, Heir, HeirShare, ShareBasis};
