//! Property tests for the solar solvers.

use falak_base::{
    GeoCoordinate, PrayerConfig, ReferencePoint, compute_prayer_schedule, hour_angle_hours,
    qibla_bearing, solar_time_hours, sun_position_for_date,
};
use falak_time::{CalendarDate, date::days_in_month};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = CalendarDate> {
    (1950i32..2050, 1u32..=12, 1u32..=31).prop_filter_map("valid date", |(y, m, d)| {
        (d <= days_in_month(y, m)).then(|| CalendarDate::new(y, m, d).unwrap())
    })
}

proptest! {
    /// Bearings always land in [0, 360).
    #[test]
    fn qibla_in_range(lat in -89.9f64..89.9, lon in -180.0f64..180.0) {
        let b = qibla_bearing(&GeoCoordinate::new(lat, lon, 0.0), &ReferencePoint::kaaba());
        prop_assert!((0.0..360.0).contains(&b.degrees), "bearing {}", b.degrees);
        prop_assert!(b.dms().degrees < 360);
    }

    /// Declination and equation of time stay within their annual envelopes.
    #[test]
    fn sun_envelope(date in any_date()) {
        let sun = sun_position_for_date(date);
        prop_assert!(sun.declination_deg.abs() <= 23.45);
        prop_assert!(sun.equation_of_time_minutes().abs() <= 17.0);
    }

    /// Hour angles, when defined, lie within half a day.
    #[test]
    fn hour_angle_bounds(lat in -89.0f64..89.0, decl in -23.44f64..23.44, alt in -30.0f64..89.0) {
        if let Some(ha) = hour_angle_hours(lat, decl, alt) {
            prop_assert!((0.0..=12.0).contains(&ha));
        }
    }

    /// Solar time wraps into one day.
    #[test]
    fn solar_time_in_day(utc in 0.0f64..24.0, lon in -180.0f64..180.0, eqt in -0.3f64..0.3) {
        let h = solar_time_hours(utc, lon, eqt);
        prop_assert!((0.0..24.0).contains(&h));
    }

    /// Away from the poles the defined markers come in schedule order.
    #[test]
    fn schedule_ordered_mid_latitudes(
        lat in -40.0f64..40.0,
        lon in -180.0f64..180.0,
        date in any_date(),
    ) {
        let tz = (lon / 15.0).round();
        let loc = GeoCoordinate::new(lat, lon, 0.0);
        let s = compute_prayer_schedule(&loc, tz, date, &PrayerConfig::default());
        prop_assert!(s.dzuhur.is_some());
        prop_assert!(s.terbit.is_some() && s.maghrib.is_some());
        prop_assert!(s.is_chronological(), "{s}");
    }
}
