//! End-to-end: JSON ephemeris table through the almanac.

use chrono::NaiveDate;
use sidera_core::{Almanac, Body, Sign, TableEphemeris};

const TABLE_JSON: &str = r#"{
  "2026-08-04": {
    "sun":        { "lon_deg": 108.31, "speed_deg_per_day": 0.953 },
    "moon":       { "lon_deg": 245.77, "speed_deg_per_day": 13.176 },
    "mercury":    { "lon_deg": 131.02, "speed_deg_per_day": -1.12 },
    "venus":      { "lon_deg": 72.4,   "speed_deg_per_day": 1.18 },
    "mars":       { "lon_deg": 151.6,  "speed_deg_per_day": 0.64 },
    "jupiter":    { "lon_deg": 91.3,   "speed_deg_per_day": 0.21 },
    "saturn":     { "lon_deg": 336.8,  "speed_deg_per_day": -0.03 },
    "uranus":     { "lon_deg": 36.2,   "speed_deg_per_day": 0.05 },
    "neptune":    { "lon_deg": 337.9,  "speed_deg_per_day": -0.01 },
    "pluto":      { "lon_deg": 277.5,  "speed_deg_per_day": -0.02 },
    "chiron":     { "lon_deg": 3.4,    "speed_deg_per_day": 0.04 },
    "north_node": { "lon_deg": 335.1,  "speed_deg_per_day": -0.05 }
  }
}"#;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()
}

#[test]
fn snapshot_from_json_table() {
    let table = TableEphemeris::from_json(TABLE_JSON).unwrap();
    assert_eq!(table.day_count(), 1);

    let almanac = Almanac::new(table);
    let snap = almanac.snapshot(date()).unwrap();

    assert_eq!(snap.iter().count(), 13);
    assert_eq!(snap.get(Body::Sun).sign, Sign::Cancer);
    assert_eq!(snap.get(Body::Moon).sign, Sign::Sagittarius);
    assert!(snap.get(Body::Mercury).retrograde);
    assert!(!snap.get(Body::Venus).retrograde);

    // South Node mirrors the North Node across the zodiac
    assert_eq!(snap.get(Body::NorthNode).sign, Sign::Pisces);
    assert_eq!(snap.get(Body::SouthNode).sign, Sign::Virgo);
    assert!(snap.get(Body::SouthNode).retrograde);
}

#[test]
fn raw_snapshot_preserves_table_longitudes() {
    let almanac = Almanac::new(TableEphemeris::from_json(TABLE_JSON).unwrap());
    let raw = almanac.raw_snapshot(date()).unwrap();
    assert!((raw.get(Body::Sun).lon_deg - 108.31).abs() < 1e-12);
    let south = raw.get(Body::SouthNode);
    assert!((south.lon_deg - 155.1).abs() < 1e-9);
}

#[test]
fn day_outside_the_table_fails() {
    let almanac = Almanac::new(TableEphemeris::from_json(TABLE_JSON).unwrap());
    let missing = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
    assert!(almanac.snapshot(missing).is_err());
}
