//! Daily prayer schedule from solar hour angles.
//!
//! Each marker is solar noon plus or minus the hour angle at which the
//! Sun reaches that marker's altitude, evaluated once with the Sun's
//! declination and equation of time at 0h of the date.
//!
//! Sources: standard spherical astronomy (Meeus ch. 15); Indonesian
//! almanac conventions for the altitudes and safety margins.

use falak_time::{CalendarDate, ClockTime};

use crate::location::GeoCoordinate;
use crate::prayer_types::{PrayerConfig, PrayerSchedule};
use crate::sun::{SunPosition, sun_position_for_date};

/// Civil clock time of the meridian transit in decimal hours.
///
/// `12 + tz − longitude/15 − eqt`
pub fn solar_noon_hours(longitude_deg: f64, tz_hours: f64, eqt_hours: f64) -> f64 {
    12.0 + tz_hours - longitude_deg / 15.0 - eqt_hours
}

/// Hour angle (in hours) at which the Sun stands at `altitude_deg`.
///
/// `cos H = [sin h − sin φ · sin δ] / [cos φ · cos δ]`
///
/// Returns `None` when |cos H| > 1: the Sun never reaches that altitude
/// on this date at this latitude.
pub fn hour_angle_hours(latitude_deg: f64, declination_deg: f64, altitude_deg: f64) -> Option<f64> {
    let phi = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();
    let h = altitude_deg.to_radians();

    let cos_h = (h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }
    Some(cos_h.acos().to_degrees() / 15.0)
}

/// Ashar altitude from the single-shadow rule.
///
/// With noon zenith distance `z = |φ − δ|`, the object's shadow equals its
/// length plus the noon shadow when the Sun stands at
/// `atan(1 / (1 + tan z))`.
pub fn ashar_altitude_deg(latitude_deg: f64, declination_deg: f64) -> f64 {
    let z = (latitude_deg - declination_deg).abs().to_radians();
    (1.0 / (1.0 + z.tan())).atan().to_degrees()
}

/// Compute the prayer schedule for a date.
///
/// `tz_hours` is the civil offset from UTC for the returned clock times.
pub fn compute_prayer_schedule(
    location: &GeoCoordinate,
    tz_hours: f64,
    date: CalendarDate,
    config: &PrayerConfig,
) -> PrayerSchedule {
    let sun = sun_position_for_date(date);
    prayer_schedule_from_sun(location, tz_hours, &sun, config)
}

/// Compute the prayer schedule from precomputed solar parameters.
pub fn prayer_schedule_from_sun(
    location: &GeoCoordinate,
    tz_hours: f64,
    sun: &SunPosition,
    config: &PrayerConfig,
) -> PrayerSchedule {
    let lat = location.latitude_deg;
    let decl = sun.declination_deg;
    let midday = solar_noon_hours(location.longitude_deg, tz_hours, sun.equation_of_time_hours);
    let margin = config.margin_hours();

    let ha = |altitude: f64, label: &'static str| {
        let value = hour_angle_hours(lat, decl, altitude);
        if value.is_none() {
            tracing::debug!(label, altitude, lat, decl, "sun never reaches altitude");
        }
        value
    };

    let ha_subuh = ha(config.subuh_altitude_deg, "subuh");
    let ha_horizon = ha(config.horizon_altitude_deg, "horizon");
    let ha_dluha = ha(config.dluha_altitude_deg, "dluha");
    let ha_ashar = ha(90.0 - ashar_altitude_deg(lat, decl), "ashar");
    let ha_isya = ha(config.isya_altitude_deg, "isya");

    let subuh = ha_subuh.map(|h| midday - h + margin);
    let imsak = subuh.map(|t| t - config.imsak_offset_hours());
    let terbit = ha_horizon.map(|h| midday - h - margin);
    let dluha = ha_dluha.map(|h| midday - h - margin);
    let dzuhur = Some(midday + margin);
    let ashar = ha_ashar.map(|h| midday + h + margin);
    let maghrib = ha_horizon.map(|h| midday + h + margin);
    let isya = ha_isya.map(|h| midday + h + margin);

    let clock = |t: Option<f64>| t.and_then(ClockTime::from_decimal_hours);
    PrayerSchedule {
        imsak: clock(imsak),
        subuh: clock(subuh),
        terbit: clock(terbit),
        dluha: clock(dluha),
        dzuhur: clock(dzuhur),
        ashar: clock(ashar),
        maghrib: clock(maghrib),
        isya: clock(isya),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noon_on_zone_meridian_without_eqt() {
        assert_eq!(solar_noon_hours(105.0, 7.0, 0.0), 12.0);
    }

    #[test]
    fn noon_shifts_with_eqt() {
        // Sundial fast by 15 minutes → clock noon 15 minutes earlier
        let noon = solar_noon_hours(0.0, 0.0, 0.25);
        assert!((noon - 11.75).abs() < 1e-12);
    }

    #[test]
    fn hour_angle_equator_equinox_horizon() {
        // φ = 0, δ = 0 → cos H = sin(h); h = 0 gives exactly 6 h
        let ha = hour_angle_hours(0.0, 0.0, 0.0).unwrap();
        assert!((ha - 6.0).abs() < 1e-12, "ha = {ha}");
    }

    #[test]
    fn hour_angle_below_horizon_is_longer() {
        let day = hour_angle_hours(-6.17, 0.0, -0.8333).unwrap();
        let dawn = hour_angle_hours(-6.17, 0.0, -20.0).unwrap();
        assert!(dawn > day);
    }

    #[test]
    fn hour_angle_polar_never_rises() {
        // Tromso (lat=70N), winter solstice: cos H > 1
        assert!(hour_angle_hours(70.0, -23.44, -0.8333).is_none());
    }

    #[test]
    fn hour_angle_polar_never_sets() {
        // Tromso (lat=70N), summer solstice: cos H < -1
        assert!(hour_angle_hours(70.0, 23.44, -0.8333).is_none());
    }

    #[test]
    fn ashar_altitude_sun_overhead() {
        // z = 0 → atan(1) = 45°
        let alt = ashar_altitude_deg(10.0, 10.0);
        assert!((alt - 45.0).abs() < 1e-12, "alt = {alt}");
    }

    #[test]
    fn ashar_altitude_decreases_with_zenith_distance() {
        let near = ashar_altitude_deg(-6.17, 0.0);
        let far = ashar_altitude_deg(-6.17, 23.44);
        // atan(1 / (1 + tan 6.17°))
        assert!((near - 42.064).abs() < 0.001, "near = {near}");
        assert!(far < near);
    }

    #[test]
    fn margins_applied_around_noon() {
        let loc = GeoCoordinate::new(0.0, 105.0, 0.0);
        let sun = sun_position_for_date(CalendarDate::new(2024, 3, 20).unwrap());
        let schedule = prayer_schedule_from_sun(&loc, 7.0, &sun, &PrayerConfig::default());
        let noon = solar_noon_hours(105.0, 7.0, sun.equation_of_time_hours);
        let expected = ClockTime::from_decimal_hours(noon + 2.0 / 60.0);
        assert_eq!(schedule.dzuhur, expected);
    }

    #[test]
    fn imsak_is_ten_minutes_before_subuh() {
        let loc = GeoCoordinate::new(-6.17, 106.82, 0.0);
        let date = CalendarDate::new(2024, 3, 20).unwrap();
        let s = compute_prayer_schedule(&loc, 7.0, date, &PrayerConfig::default());
        let imsak = s.imsak.unwrap().minutes_of_day();
        let subuh = s.subuh.unwrap().minutes_of_day();
        assert_eq!(subuh - imsak, 10);
    }
}
