//! Reference table of Indonesian cities.
//!
//! Each entry carries the coordinate, the civil timezone, and the qibla
//! bearing as printed in regional almanacs. The table is plain data; the
//! solvers never consult it.

use serde::{Deserialize, Serialize};

use crate::location::GeoCoordinate;

/// A named location with its civil timezone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    /// Latitude in degrees, north positive.
    pub lat: f64,
    /// Longitude in degrees, east positive.
    pub lon: f64,
    /// Civil offset from UTC in hours.
    pub tz: f64,
    /// Published qibla bearing (`D°M'S"`), if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qibla: Option<String>,
}

impl City {
    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.lat, self.lon, 0.0)
    }
}

/// (name, lat, lon, tz, qibla)
const CITY_TABLE: [(&str, f64, f64, f64, &str); 25] = [
    ("Sabang", 5.90, 95.35, 7.0, "291°56'08\""),
    ("Banda Aceh", 5.58, 95.33, 7.0, "292°08'13\""),
    ("Medan", 3.63, 98.63, 7.0, "292°44'46\""),
    ("Pekanbaru", 0.60, 101.23, 7.0, "293°46'18\""),
    ("Padang", -0.95, 100.35, 7.0, "294°41'51\""),
    ("Jambi", -1.60, 103.63, 7.0, "294°15'42\""),
    ("Palembang", -2.98, 104.78, 7.0, "295°36'33\""),
    ("Bandar Lampung", -5.42, 105.28, 7.0, "295°17'11\""),
    ("Jakarta", -6.17, 106.82, 7.0, "295°08'31\""),
    ("Bandung", -6.95, 107.57, 7.0, "295°11'10\""),
    ("Semarang", -7.00, 110.40, 7.0, "294°30'17\""),
    ("Yogyakarta", -7.80, 110.35, 7.0, "294°42'46\""),
    ("Surabaya", -7.25, 112.75, 7.0, "294°01'45\""),
    ("Pontianak", 0.00, 109.37, 7.0, "292°44'37\""),
    ("Banjarmasin", -3.37, 114.67, 8.0, "292°51'38\""),
    ("Samarinda", -0.47, 117.18, 8.0, "291°59'21\""),
    ("Denpasar", -8.62, 115.22, 8.0, "293°44'32\""),
    ("Mataram", -8.60, 116.13, 8.0, "293°32'22\""),
    ("Makassar", -5.13, 119.45, 8.0, "292°28'04\""),
    ("Kendari", -3.95, 122.58, 8.0, "291°57'36\""),
    ("Gorontalo", 0.57, 123.08, 8.0, "291°29'37\""),
    ("Manado", 1.55, 124.88, 8.0, "291°21'58\""),
    ("Ambon", -3.70, 128.23, 9.0, "291°28'23\""),
    ("Jayapura", -2.47, 140.63, 9.0, "292°09'12\""),
    ("Merauke", -8.50, 140.45, 9.0, "290°09'06\""),
];

/// The built-in table of 25 Indonesian cities, west to east.
pub fn indonesian_cities() -> Vec<City> {
    CITY_TABLE
        .iter()
        .map(|&(name, lat, lon, tz, qibla)| City {
            name: name.to_string(),
            lat,
            lon,
            tz,
            qibla: Some(qibla.to_string()),
        })
        .collect()
}

/// Look up a city by name, ignoring ASCII case.
pub fn find_city<'a>(cities: &'a [City], name: &str) -> Option<&'a City> {
    cities.iter().find(|c| c.name.eq_ignore_ascii_case(name.trim()))
}
