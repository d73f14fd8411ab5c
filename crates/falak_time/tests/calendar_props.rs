//! Property tests for calendar and clock conversions.

use falak_time::{CalendarDate, ClockTime, UtcTime, date::days_in_month};
use proptest::prelude::*;

proptest! {
    /// Every valid date survives a trip through the Julian Day.
    #[test]
    fn date_jd_round_trip(year in 1600i32..2400, month in 1u32..=12, day in 1u32..=31) {
        prop_assume!(day <= days_in_month(year, month));
        let date = CalendarDate::new(year, month, day).unwrap();
        prop_assert_eq!(CalendarDate::from_jd(date.to_jd()), date);
    }

    /// Consecutive dates are exactly one Julian Day apart.
    #[test]
    fn succ_is_one_day(year in 1600i32..2400, month in 1u32..=12, day in 1u32..=28) {
        let date = CalendarDate::new(year, month, day).unwrap();
        prop_assert_eq!(date.succ().to_jd() - date.to_jd(), 1.0);
    }

    /// Any finite decimal hour maps to a valid clock reading.
    #[test]
    fn clock_time_in_range(value in -48.0f64..72.0) {
        let t = ClockTime::from_decimal_hours(value).unwrap();
        prop_assert!(t.hour() < 24);
        prop_assert!(t.minute() < 60);
    }

    /// Unix seconds land on the calendar date the Julian Day names.
    #[test]
    fn unix_seconds_date(unix_s in 0u64..4_102_444_800) {
        let t = UtcTime::from_unix_seconds(unix_s as f64);
        prop_assert!(t.hour < 24 && t.minute < 60 && t.second < 60.0);
        let expected = CalendarDate::from_jd(falak_time::UNIX_EPOCH_JD + (unix_s / 86_400) as f64);
        prop_assert_eq!(t.date(), expected);
    }
}
