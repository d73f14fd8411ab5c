use falak_base::{
    GeoCoordinate, PrayerConfig, PrayerSchedule, QiblaBearing, ReferencePoint, SolarTime,
    istiwa_time, qibla_bearing,
};
use falak_time::{CalendarDate, UtcTime};
use faraid::{Distribution, FamilyComposition, distribute};

use crate::error::FalakError;

/// Reject offsets that no civil timezone uses.
pub(crate) fn check_timezone(tz_hours: f64) -> Result<(), FalakError> {
    if tz_hours.is_finite() && (-12.0..=14.0).contains(&tz_hours) {
        Ok(())
    } else {
        Err(FalakError::InvalidTimezone(tz_hours))
    }
}

pub(crate) fn prayer_schedule_with(
    coord: &GeoCoordinate,
    tz_hours: f64,
    date: CalendarDate,
    config: &PrayerConfig,
) -> Result<PrayerSchedule, FalakError> {
    coord.validate()?;
    check_timezone(tz_hours)?;
    CalendarDate::new(date.year, date.month, date.day)?;
    let schedule = falak_base::compute_prayer_schedule(coord, tz_hours, date, config);
    if !schedule.is_complete() {
        tracing::info!(%date, "schedule has unreachable altitudes");
    }
    Ok(schedule)
}

pub(crate) fn qibla_with(
    coord: &GeoCoordinate,
    reference: &ReferencePoint,
) -> Result<QiblaBearing, FalakError> {
    coord.validate()?;
    Ok(qibla_bearing(coord, reference))
}

/// Daily prayer schedule with the default (Shafi'i, Indonesian) parameters.
///
/// Fields are `None` where the Sun never reaches the required altitude.
#[tracing::instrument(level = "debug", err)]
pub fn compute_prayer_schedule(
    coord: &GeoCoordinate,
    tz_hours: f64,
    date: CalendarDate,
) -> Result<PrayerSchedule, FalakError> {
    prayer_schedule_with(coord, tz_hours, date, &PrayerConfig::default())
}

/// Initial great-circle bearing toward the Kaaba.
#[tracing::instrument(level = "debug", err)]
pub fn compute_qibla_bearing(
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<QiblaBearing, FalakError> {
    qibla_with(
        &GeoCoordinate::new(latitude_deg, longitude_deg, 0.0),
        &ReferencePoint::kaaba(),
    )
}

/// Istiwa (local apparent solar) time for a UTC instant.
#[tracing::instrument(level = "debug", err)]
pub fn compute_solar_time(utc: &UtcTime, coord: &GeoCoordinate) -> Result<SolarTime, FalakError> {
    utc.validate()?;
    coord.validate()?;
    Ok(istiwa_time(utc, coord.longitude_deg))
}

/// Faraid distribution after checking that at most one spouse survives.
#[tracing::instrument(level = "debug", err)]
pub fn compute_inheritance(family: &FamilyComposition) -> Result<Distribution, FalakError> {
    family.check_spouses()?;
    Ok(distribute(family)?)
}
