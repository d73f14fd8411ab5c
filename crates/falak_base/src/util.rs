//! Angle helpers shared by the solvers.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::BaseError;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle to (-180, 180] degrees.
pub fn normalize_180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Whole degrees, arc-minutes and rounded arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dms {
    /// Whole degrees (0..359 for a bearing).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds rounded to the nearest whole second (0..59).
    pub seconds: u8,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds as f64 / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Minutes are truncated and seconds rounded; a rounded 60″ carries into
/// the minutes and a carried 60′ into the degrees. Negative input is
/// taken by absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let mut degrees = d.floor() as u32;
    let remainder = (d - degrees as f64) * 60.0;
    let mut minutes = remainder.floor() as u32;
    let mut seconds = ((remainder - minutes as f64) * 60.0).round() as u32;
    if seconds >= 60 {
        seconds -= 60;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
        degrees += 1;
    }
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: seconds as u8,
    }
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:02}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Parse a `D°M'S"` string such as `295°08'31"` into decimal degrees.
///
/// Minutes and seconds may be written with or without a leading zero.
/// Only unsigned whole-number components are accepted.
pub fn parse_dms(text: &str) -> Result<f64, BaseError> {
    let err = || BaseError::InvalidDms(text.to_string());
    let s = text.trim();
    let (deg, rest) = s.split_once('°').ok_or_else(err)?;
    let (min, rest) = rest.split_once('\'').ok_or_else(err)?;
    let sec = rest.strip_suffix('"').ok_or_else(err)?;

    let parse = |part: &str| -> Result<u32, BaseError> {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        part.parse::<u32>().map_err(|_| err())
    };
    let (d, m, s) = (parse(deg)?, parse(min)?, parse(sec)?);
    if m >= 60 || s >= 60 {
        return Err(err());
    }
    Ok(d as f64 + m as f64 / 60.0 + s as f64 / 3600.0)
}
