//! Geographic coordinates and the Indonesian timezone heuristic.

use serde::{Deserialize, Serialize};

use crate::error::BaseError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Elevation above mean sea level in meters. Display only; the
    /// solvers do not apply a horizon-dip correction.
    #[serde(default)]
    pub elevation_m: f64,
}

/// Fallback coordinate (central Jakarta, 10 m) for callers without a
/// location fix.
pub const DEFAULT_COORDINATE: GeoCoordinate = GeoCoordinate::new(-6.2, 106.816_666, 10.0);

impl GeoCoordinate {
    /// Create a new geographic coordinate.
    pub const fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// Check latitude and longitude ranges.
    ///
    /// The solvers assume a valid coordinate; call this at the boundary.
    pub fn validate(&self) -> Result<(), BaseError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(BaseError::InvalidLocation(format!(
                "latitude {} outside [-90, 90]",
                self.latitude_deg
            )));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(BaseError::InvalidLocation(format!(
                "longitude {} outside [-180, 180]",
                self.longitude_deg
            )));
        }
        Ok(())
    }
}

/// Coarse Indonesian civil timezone from longitude alone.
///
/// WIB (UTC+7) west of 114.5°E, WITA (UTC+8) up to 135°E, WIT (UTC+9)
/// beyond. Only meaningful inside Indonesia.
pub fn indonesian_timezone(longitude_deg: f64) -> f64 {
    if longitude_deg < 114.5 {
        7.0
    } else if longitude_deg < 135.0 {
        8.0
    } else {
        9.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocoordinate_radians() {
        let loc = GeoCoordinate::new(-6.17, 106.82, 0.0);
        assert!((loc.latitude_rad() - (-6.17_f64).to_radians()).abs() < 1e-15);
        assert!((loc.longitude_rad() - 106.82_f64.to_radians()).abs() < 1e-15);
    }

    #[test]
    fn validate_accepts_poles_and_antimeridian() {
        assert!(GeoCoordinate::new(90.0, 180.0, 0.0).validate().is_ok());
        assert!(GeoCoordinate::new(-90.0, -180.0, 0.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert!(GeoCoordinate::new(90.5, 0.0, 0.0).validate().is_err());
        assert!(GeoCoordinate::new(0.0, -180.1, 0.0).validate().is_err());
        assert!(GeoCoordinate::new(f64::NAN, 0.0, 0.0).validate().is_err());
    }

    #[test]
    fn timezone_bands() {
        assert_eq!(indonesian_timezone(106.82), 7.0); // Jakarta
        assert_eq!(indonesian_timezone(114.67), 8.0); // Banjarmasin
        assert_eq!(indonesian_timezone(124.88), 8.0); // Manado
        assert_eq!(indonesian_timezone(140.63), 9.0); // Jayapura
    }

    #[test]
    fn timezone_band_edges() {
        assert_eq!(indonesian_timezone(114.499), 7.0);
        assert_eq!(indonesian_timezone(114.5), 8.0);
        assert_eq!(indonesian_timezone(135.0), 9.0);
    }

    #[test]
    fn default_is_valid() {
        assert!(DEFAULT_COORDINATE.validate().is_ok());
    }
}
