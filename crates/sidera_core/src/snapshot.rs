//! Whole-sky position snapshots for one day.

use chrono::NaiveDate;

use crate::body::{ALL_BODIES, Body};
use crate::ephemeris::RawPosition;
use crate::zodiac::Sign;

/// Sign and motion state of one body on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub sign: Sign,
    pub retrograde: bool,
}

impl Position {
    /// Classify a raw position. Speed exactly zero counts as direct.
    pub fn from_raw(raw: RawPosition) -> Self {
        Self {
            sign: Sign::from_longitude(raw.lon_deg),
            retrograde: raw.speed_deg_per_day < 0.0,
        }
    }
}

/// Raw ecliptic state of all tracked bodies on one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSnapshot {
    date: NaiveDate,
    positions: [RawPosition; Body::COUNT],
}

impl RawSnapshot {
    pub(crate) fn new(date: NaiveDate, positions: [RawPosition; Body::COUNT]) -> Self {
        Self { date, positions }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn get(&self, body: Body) -> RawPosition {
        self.positions[body.index()]
    }

    /// All bodies in canonical order with their raw positions.
    pub fn iter(&self) -> impl Iterator<Item = (Body, RawPosition)> + '_ {
        ALL_BODIES.iter().map(|&body| (body, self.get(body)))
    }

    /// Sign/retrograde view of the same day.
    pub fn classify(&self) -> Snapshot {
        let mut positions = [Position {
            sign: Sign::Aries,
            retrograde: false,
        }; Body::COUNT];
        for (body, raw) in self.iter() {
            positions[body.index()] = Position::from_raw(raw);
        }
        Snapshot {
            date: self.date,
            positions,
        }
    }
}

/// Sign and retrograde state of all tracked bodies on one day.
///
/// Always holds exactly the 13 tracked bodies; there is no partial form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    date: NaiveDate,
    positions: [Position; Body::COUNT],
}

impl Snapshot {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn get(&self, body: Body) -> Position {
        self.positions[body.index()]
    }

    /// All bodies in canonical order with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (Body, Position)> + '_ {
        ALL_BODIES.iter().map(|&body| (body, self.get(body)))
    }

    /// Bodies currently retrograde, in canonical order.
    pub fn retrograde_bodies(&self) -> impl Iterator<Item = Body> + '_ {
        self.iter()
            .filter(|(_, pos)| pos.retrograde)
            .map(|(body, _)| body)
    }
}
