//! Configured entry point.
//!
//! [`Falak`] owns a [`FalakConfig`] so the reference point, prayer
//! parameters and city table can be swapped without touching the
//! solvers. It holds no other state.

use std::path::Path;

use falak_base::{City, GeoCoordinate, PrayerSchedule, QiblaBearing, SolarTime};
use falak_config::FalakConfig;
use falak_time::{CalendarDate, UtcTime};
use faraid::{Distribution, FamilyComposition};

use crate::convenience::{self, prayer_schedule_with, qibla_with};
use crate::error::FalakError;

#[derive(Debug, Clone, Default)]
pub struct Falak {
    config: FalakConfig,
}

impl Falak {
    pub fn new(config: FalakConfig) -> Self {
        Self { config }
    }

    /// Load a context from a TOML configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, FalakError> {
        Ok(Self::new(FalakConfig::from_toml_file(path)?))
    }

    pub fn config(&self) -> &FalakConfig {
        &self.config
    }

    pub fn cities(&self) -> &[City] {
        &self.config.cities
    }

    /// Case-insensitive lookup in the configured city table.
    pub fn city(&self, name: &str) -> Result<&City, FalakError> {
        self.config
            .city(name)
            .ok_or_else(|| FalakError::UnknownCity(name.to_string()))
    }

    /// Prayer schedule using the configured prayer parameters.
    #[tracing::instrument(level = "debug", skip(self), err)]
    pub fn prayer_schedule(
        &self,
        coord: &GeoCoordinate,
        tz_hours: f64,
        date: CalendarDate,
    ) -> Result<PrayerSchedule, FalakError> {
        prayer_schedule_with(coord, tz_hours, date, &self.config.prayer)
    }

    /// Prayer schedule for a named city in its own timezone.
    #[tracing::instrument(level = "debug", skip(self), err)]
    pub fn city_schedule(
        &self,
        name: &str,
        date: CalendarDate,
    ) -> Result<PrayerSchedule, FalakError> {
        let city = self.city(name)?;
        self.prayer_schedule(&city.coordinate(), city.tz, date)
    }

    /// Bearing toward the configured reference point.
    #[tracing::instrument(level = "debug", skip(self), err)]
    pub fn qibla_bearing(&self, coord: &GeoCoordinate) -> Result<QiblaBearing, FalakError> {
        qibla_with(coord, &self.config.reference)
    }

    pub fn city_qibla(&self, name: &str) -> Result<QiblaBearing, FalakError> {
        let city = self.city(name)?;
        self.qibla_bearing(&city.coordinate())
    }

    pub fn solar_time(
        &self,
        utc: &UtcTime,
        coord: &GeoCoordinate,
    ) -> Result<SolarTime, FalakError> {
        convenience::compute_solar_time(utc, coord)
    }

    pub fn inheritance(&self, family: &FamilyComposition) -> Result<Distribution, FalakError> {
        convenience::compute_inheritance(family)
    }
}
