//! Qibla direction: initial great-circle bearing toward the Kaaba.
//!
//! Standard forward-azimuth formula on a spherical Earth. The reference
//! point is injected so tests and alternative conventions can substitute
//! their own.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::location::GeoCoordinate;
use crate::util::{Dms, deg_to_dms, normalize_360};

/// Compass tolerance within which a heading counts as facing the qibla.
pub const ALIGNMENT_TOLERANCE_DEG: f64 = 5.0;

/// A fixed point on the globe that bearings are measured toward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl ReferencePoint {
    /// Kaaba latitude in degrees.
    pub const KAABA_LATITUDE_DEG: f64 = 21.422_487;
    /// Kaaba longitude in degrees.
    pub const KAABA_LONGITUDE_DEG: f64 = 39.826_206;

    pub fn new(name: impl Into<String>, latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            name: name.into(),
            latitude_deg,
            longitude_deg,
        }
    }

    /// The Kaaba in Mecca.
    pub fn kaaba() -> Self {
        Self::new("Kaaba", Self::KAABA_LATITUDE_DEG, Self::KAABA_LONGITUDE_DEG)
    }
}

impl Default for ReferencePoint {
    fn default() -> Self {
        Self::kaaba()
    }
}

/// Bearing from an observer toward a reference point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QiblaBearing {
    /// Degrees clockwise from true north, in [0, 360).
    pub degrees: f64,
}

impl QiblaBearing {
    /// The bearing as whole degrees, minutes and rounded seconds.
    pub fn dms(&self) -> Dms {
        let dms = deg_to_dms(self.degrees);
        // 359°59'59.6" rounds to 360°00'00"
        if dms.degrees >= 360 {
            Dms { degrees: 0, ..dms }
        } else {
            dms
        }
    }
}

impl Display for QiblaBearing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dms())
    }
}

/// Initial great-circle bearing from `observer` to `reference`.
///
/// `θ = atan2(sin Δλ · cos φ2, cos φ1 · sin φ2 − sin φ1 · cos φ2 · cos Δλ)`
pub fn qibla_bearing(observer: &GeoCoordinate, reference: &ReferencePoint) -> QiblaBearing {
    let phi1 = observer.latitude_rad();
    let phi2 = reference.latitude_deg.to_radians();
    let d_lon = (reference.longitude_deg - observer.longitude_deg).to_radians();

    let y = d_lon.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lon.cos();
    let theta = y.atan2(x).to_degrees();

    QiblaBearing {
        degrees: normalize_360((theta + 360.0) % 360.0),
    }
}

/// Whether a compass heading points at the bearing within `tolerance_deg`.
///
/// The difference wraps, so 358° and 2° are 4° apart.
pub fn is_aligned(heading_deg: f64, bearing_deg: f64, tolerance_deg: f64) -> bool {
    let diff = normalize_360(heading_deg - bearing_deg);
    diff.min(360.0 - diff) < tolerance_deg
}
