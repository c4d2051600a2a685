//! File-backed ephemeris table provider.
//!
//! A table is pre-exported from a real astronomical library as JSON:
//! ISO dates mapping body keys to longitude/speed rows, sidereal (Lahiri)
//! longitudes at UTC midnight. Producing the file is the data pipeline's
//! job; this module only loads and serves it.
//!
//! ```json
//! {
//!   "2026-08-04": {
//!     "sun": { "lon_deg": 108.31, "speed_deg_per_day": 0.953 },
//!     "moon": { "lon_deg": 245.77, "speed_deg_per_day": 13.176 }
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::body::Body;
use crate::ephemeris::{Ephemeris, RawPosition};
use crate::error::EphemerisError;

/// One table row: a body's longitude and daily speed on one day.
#[derive(Debug, Clone, Copy, Deserialize)]
struct TableRow {
    lon_deg: f64,
    speed_deg_per_day: f64,
}

/// Ephemeris backed by a pre-exported per-day table.
#[derive(Debug, Clone)]
pub struct TableEphemeris {
    days: HashMap<NaiveDate, HashMap<String, TableRow>>,
}

impl TableEphemeris {
    /// Load a table from a JSON file.
    ///
    /// A missing or unreadable file is [`EphemerisError::Unavailable`],
    /// a setup-time precondition, reported once and never retried here.
    pub fn load(path: &Path) -> Result<Self, EphemerisError> {
        let text = fs::read_to_string(path)
            .map_err(|e| EphemerisError::Unavailable(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Parse a table from JSON text.
    pub fn from_json(text: &str) -> Result<Self, EphemerisError> {
        let days = serde_json::from_str(text)
            .map_err(|e| EphemerisError::Unavailable(format!("ephemeris table: {e}")))?;
        Ok(Self { days })
    }

    /// Build a table from in-memory rows.
    ///
    /// Intended for tests and embedding hosts that already hold the data.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, Body, RawPosition)>,
    {
        let mut days: HashMap<NaiveDate, HashMap<String, TableRow>> = HashMap::new();
        for (date, body, raw) in rows {
            days.entry(date).or_default().insert(
                body.key().to_string(),
                TableRow {
                    lon_deg: raw.lon_deg,
                    speed_deg_per_day: raw.speed_deg_per_day,
                },
            );
        }
        Self { days }
    }

    /// Number of days the table covers.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }
}

impl Ephemeris for TableEphemeris {
    fn longitude_and_speed(
        &self,
        date: NaiveDate,
        body: Body,
    ) -> Result<RawPosition, EphemerisError> {
        if body.is_derived() {
            return Err(EphemerisError::UnsupportedBody(body));
        }
        let row = self
            .days
            .get(&date)
            .and_then(|day| day.get(body.key()))
            .ok_or(EphemerisError::DateNotCovered { body, date })?;
        Ok(RawPosition {
            lon_deg: row.lon_deg,
            speed_deg_per_day: row.speed_deg_per_day,
        })
    }
}
