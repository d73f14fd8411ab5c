//! Configuration for the falak solvers with TOML file support.
//!
//! Every section is optional; an empty file yields the Kaaba as reference
//! point, the default prayer parameters, and the built-in Indonesian city
//! table.
//!
//! ```toml
//! [reference]
//! name = "Kaaba"
//! latitude_deg = 21.422487
//! longitude_deg = 39.826206
//!
//! [prayer]
//! safety_margin_min = 2.0
//!
//! [[cities]]
//! name = "Jakarta"
//! lat = -6.17
//! lon = 106.82
//! tz = 7.0
//! ```

pub mod error;

use std::collections::HashSet;
use std::path::Path;

use falak_base::{City, PrayerConfig, ReferencePoint, find_city, indonesian_cities};
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Configuration shared by the facade and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FalakConfig {
    /// Point qibla bearings are measured toward.
    #[serde(default)]
    pub reference: ReferencePoint,

    /// Altitudes and offsets for the prayer schedule.
    #[serde(default)]
    pub prayer: PrayerConfig,

    /// Named locations usable by `city_schedule` and the CLI.
    #[serde(default = "indonesian_cities")]
    pub cities: Vec<City>,
}

impl Default for FalakConfig {
    fn default() -> Self {
        Self {
            reference: ReferencePoint::default(),
            prayer: PrayerConfig::default(),
            cities: indonesian_cities(),
        }
    }
}

impl FalakConfig {
    /// Load and validate configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), cities = config.cities.len(), "loaded config");
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Check the reference point, prayer parameters and every city.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.reference;
        if !(-90.0..=90.0).contains(&r.latitude_deg)
            || !(-180.0..=180.0).contains(&r.longitude_deg)
        {
            return Err(ConfigError::Invalid(format!(
                "reference point {} at ({}, {}) is off the globe",
                r.name, r.latitude_deg, r.longitude_deg
            )));
        }

        let p = &self.prayer;
        for (field, alt) in [
            ("subuh_altitude_deg", p.subuh_altitude_deg),
            ("isya_altitude_deg", p.isya_altitude_deg),
            ("horizon_altitude_deg", p.horizon_altitude_deg),
            ("dluha_altitude_deg", p.dluha_altitude_deg),
        ] {
            if !(-90.0..=90.0).contains(&alt) {
                return Err(ConfigError::Invalid(format!("prayer.{field} = {alt}")));
            }
        }
        if !(p.safety_margin_min.is_finite() && p.imsak_offset_min.is_finite()) {
            return Err(ConfigError::Invalid(
                "prayer offsets must be finite".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for city in &self.cities {
            city.coordinate()
                .validate()
                .map_err(|e| ConfigError::Invalid(format!("city {}: {e}", city.name)))?;
            if !(-12.0..=14.0).contains(&city.tz) {
                return Err(ConfigError::Invalid(format!(
                    "city {}: timezone {} outside [-12, 14]",
                    city.name, city.tz
                )));
            }
            if !seen.insert(city.name.to_lowercase()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate city {}",
                    city.name
                )));
            }
        }
        Ok(())
    }

    /// Case-insensitive city lookup.
    pub fn city(&self, name: &str) -> Option<&City> {
        find_city(&self.cities, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = FalakConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.reference, ReferencePoint::kaaba());
        assert_eq!(config.prayer, PrayerConfig::default());
        assert_eq!(config.cities.len(), 25);
        assert!(config.city("jakarta").is_some());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = FalakConfig::default();
        let text = config.to_toml_string().unwrap();
        let parsed = FalakConfig::from_toml_str(&text).expect("should parse");
        assert_eq!(parsed.cities.len(), config.cities.len());
        assert!((parsed.prayer.subuh_altitude_deg - (-20.0)).abs() < 1e-12);
        assert_eq!(parsed.reference.name, "Kaaba");
    }

    #[test]
    fn partial_prayer_section_overrides() {
        let toml = r#"
            [prayer]
            subuh_altitude_deg = -18.0
            safety_margin_min = 0.0
        "#;
        let config = FalakConfig::from_toml_str(toml).unwrap();
        assert!((config.prayer.subuh_altitude_deg + 18.0).abs() < 1e-12);
        assert!(config.prayer.safety_margin_min.abs() < 1e-12);
        assert!((config.prayer.isya_altitude_deg + 18.0).abs() < 1e-12);
        assert!((config.prayer.imsak_offset_min - 10.0).abs() < 1e-12);
    }

    #[test]
    fn custom_cities_replace_builtin_table() {
        let toml = r#"
            [reference]
            name = "Test"
            latitude_deg = 0.0
            longitude_deg = 0.0

            [[cities]]
            name = "Kuala Lumpur"
            lat = 3.139
            lon = 101.687
            tz = 8.0
        "#;
        let config = FalakConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.cities.len(), 1);
        assert_eq!(config.reference.name, "Test");
        assert!(config.city("KUALA LUMPUR").unwrap().qibla.is_none());
        assert!(config.city("Jakarta").is_none());
    }

    #[test]
    fn rejects_bad_city() {
        let toml = r#"
            [[cities]]
            name = "Nowhere"
            lat = 95.0
            lon = 0.0
            tz = 0.0
        "#;
        assert!(matches!(
            FalakConfig::from_toml_str(toml),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_duplicate_city() {
        let toml = r#"
            [[cities]]
            name = "Bogor"
            lat = -6.6
            lon = 106.8
            tz = 7.0

            [[cities]]
            name = "bogor"
            lat = -6.6
            lon = 106.8
            tz = 7.0
        "#;
        let err = FalakConfig::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate"), "{err}");
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        assert!(matches!(
            FalakConfig::from_toml_str("[prayer\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FalakConfig::from_toml_file("/nonexistent/falak.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("falak_config_{}.toml", std::process::id()));
        std::fs::write(&path, "[prayer]\nimsak_offset_min = 15.0\n").unwrap();
        let config = FalakConfig::from_toml_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!((config.prayer.imsak_offset_min - 15.0).abs() < 1e-12);
    }
}
