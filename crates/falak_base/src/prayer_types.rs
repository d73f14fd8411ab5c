//! Types for prayer-time calculations.
//!
//! Provides the prayer markers, solver configuration, and the daily
//! schedule returned by the prayer-time module.

use std::fmt::{Display, Formatter};

use falak_time::ClockTime;
use serde::{Deserialize, Serialize};

/// Placeholder shown for a time the Sun never reaches on that day.
pub const UNDEFINED_CLOCK: &str = "--:--";

/// The eight daily markers, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prayer {
    /// Start of the pre-dawn fasting cutoff, ten minutes before Subuh.
    Imsak,
    /// Dawn prayer: Sun center at -20°.
    Subuh,
    /// Sunrise: upper limb at the horizon (-0.8333° with refraction).
    Terbit,
    /// Forenoon prayer: Sun at +3.5°.
    Dluha,
    /// Noon prayer: just after the meridian transit.
    Dzuhur,
    /// Afternoon prayer: single-shadow rule.
    Ashar,
    /// Sunset.
    Maghrib,
    /// Night prayer: Sun center at -18°.
    Isya,
}

/// All markers in schedule order.
pub const ALL_PRAYERS: [Prayer; 8] = [
    Prayer::Imsak,
    Prayer::Subuh,
    Prayer::Terbit,
    Prayer::Dluha,
    Prayer::Dzuhur,
    Prayer::Ashar,
    Prayer::Maghrib,
    Prayer::Isya,
];

/// The five obligatory prayers, used for next-prayer lookup.
pub const FARD_PRAYERS: [Prayer; 5] = [
    Prayer::Subuh,
    Prayer::Dzuhur,
    Prayer::Ashar,
    Prayer::Maghrib,
    Prayer::Isya,
];

impl Prayer {
    /// Indonesian name as printed on schedules.
    pub fn name(self) -> &'static str {
        match self {
            Self::Imsak => "Imsak",
            Self::Subuh => "Subuh",
            Self::Terbit => "Terbit",
            Self::Dluha => "Dluha",
            Self::Dzuhur => "Dzuhur",
            Self::Ashar => "Ashar",
            Self::Maghrib => "Maghrib",
            Self::Isya => "Isya",
        }
    }

    /// Whether this marker falls before solar noon.
    pub fn is_morning(self) -> bool {
        matches!(
            self,
            Self::Imsak | Self::Subuh | Self::Terbit | Self::Dluha
        )
    }
}

impl Display for Prayer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Solar altitudes and empirical offsets for the schedule.
///
/// Defaults follow the Shafi'i convention used by Indonesian almanacs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrayerConfig {
    /// Sun altitude at Subuh in degrees. Default: -20.0.
    pub subuh_altitude_deg: f64,
    /// Sun altitude at Isya in degrees. Default: -18.0.
    pub isya_altitude_deg: f64,
    /// Sun altitude at sunrise/sunset in degrees. Default: -0.8333
    /// (34' refraction + 16' semidiameter).
    pub horizon_altitude_deg: f64,
    /// Sun altitude at Dluha in degrees. Default: 3.5.
    pub dluha_altitude_deg: f64,
    /// Safety margin applied to each time, in minutes. Default: 2.0.
    pub safety_margin_min: f64,
    /// Imsak lead before Subuh, in minutes. Default: 10.0.
    pub imsak_offset_min: f64,
}

impl Default for PrayerConfig {
    fn default() -> Self {
        Self {
            subuh_altitude_deg: -20.0,
            isya_altitude_deg: -18.0,
            horizon_altitude_deg: -0.8333,
            dluha_altitude_deg: 3.5,
            safety_margin_min: 2.0,
            imsak_offset_min: 10.0,
        }
    }
}

impl PrayerConfig {
    /// Safety margin in hours.
    pub fn margin_hours(&self) -> f64 {
        self.safety_margin_min / 60.0
    }

    /// Imsak lead in hours.
    pub fn imsak_offset_hours(&self) -> f64 {
        self.imsak_offset_min / 60.0
    }
}

/// One day's prayer times in local clock time.
///
/// A field is `None` when the Sun never reaches the corresponding
/// altitude on that date (polar day or night).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerSchedule {
    pub imsak: Option<ClockTime>,
    pub subuh: Option<ClockTime>,
    pub terbit: Option<ClockTime>,
    pub dluha: Option<ClockTime>,
    pub dzuhur: Option<ClockTime>,
    pub ashar: Option<ClockTime>,
    pub maghrib: Option<ClockTime>,
    pub isya: Option<ClockTime>,
}

impl PrayerSchedule {
    /// Time of a single marker.
    pub fn get(&self, prayer: Prayer) -> Option<ClockTime> {
        match prayer {
            Prayer::Imsak => self.imsak,
            Prayer::Subuh => self.subuh,
            Prayer::Terbit => self.terbit,
            Prayer::Dluha => self.dluha,
            Prayer::Dzuhur => self.dzuhur,
            Prayer::Ashar => self.ashar,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isya => self.isya,
        }
    }

    /// All markers in schedule order.
    pub fn entries(&self) -> [(Prayer, Option<ClockTime>); 8] {
        ALL_PRAYERS.map(|p| (p, self.get(p)))
    }

    /// Whether every marker is defined.
    pub fn is_complete(&self) -> bool {
        ALL_PRAYERS.iter().all(|&p| self.get(p).is_some())
    }

    /// Whether the defined markers are non-decreasing in schedule order.
    ///
    /// Undefined markers are skipped. A schedule whose Isya wraps past
    /// midnight reports `false`.
    pub fn is_chronological(&self) -> bool {
        let defined: Vec<ClockTime> = ALL_PRAYERS.iter().filter_map(|&p| self.get(p)).collect();
        defined.windows(2).all(|w| w[0] <= w[1])
    }

    /// The next obligatory prayer strictly after `now`.
    ///
    /// After Isya the answer wraps to Subuh of the following day.
    /// Undefined prayers are skipped; `None` only when all five are
    /// undefined.
    pub fn next_prayer(&self, now: ClockTime) -> Option<Prayer> {
        let defined = || {
            FARD_PRAYERS
                .iter()
                .filter_map(|&p| self.get(p).map(|t| (p, t)))
        };
        defined()
            .find(|&(_, t)| now < t)
            .or_else(|| defined().next())
            .map(|(p, _)| p)
    }
}

/// Format an optional clock time, using `--:--` for `None`.
pub fn format_clock(time: Option<ClockTime>) -> String {
    time.map_or_else(|| UNDEFINED_CLOCK.to_string(), |t| t.to_string())
}

impl Display for PrayerSchedule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, (prayer, time)) in self.entries().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:<8} {}", prayer.name(), format_clock(time))?;
        }
        Ok(())
    }
}
