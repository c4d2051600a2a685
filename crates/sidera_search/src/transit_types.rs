//! Types for sign-ingress and station scans.

use chrono::NaiveDate;

use sidera_core::{ALL_BODIES, Body, Sign};

/// Direction of a station: into or out of retrograde motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Station {
    /// Apparent motion flips from direct to retrograde.
    Retrograde,
    /// Apparent motion flips from retrograde to direct.
    Direct,
}

/// A body's projected move into a new sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignIngress {
    /// First scanned day the new sign is observed.
    pub date: NaiveDate,
    /// The sign being entered.
    pub sign: Sign,
}

/// A body's projected retrograde flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationEvent {
    /// First scanned day the flipped state is observed.
    pub date: NaiveDate,
    pub station: Station,
}

/// Upcoming changes for one body.
///
/// The two attributes are tracked independently: a body can have a sign
/// ingress and a station on different days, or only one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BodyTransit {
    pub ingress: Option<SignIngress>,
    pub station: Option<StationEvent>,
}

impl BodyTransit {
    pub const fn is_empty(&self) -> bool {
        self.ingress.is_none() && self.station.is_none()
    }
}

/// Projected transits for all bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitSet {
    entries: [BodyTransit; Body::COUNT],
}

impl TransitSet {
    pub(crate) fn new(entries: [BodyTransit; Body::COUNT]) -> Self {
        Self { entries }
    }

    pub fn get(&self, body: Body) -> BodyTransit {
        self.entries[body.index()]
    }

    /// Bodies with at least one projected change, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Body, BodyTransit)> + '_ {
        ALL_BODIES
            .iter()
            .map(|&body| (body, self.get(body)))
            .filter(|(_, transit)| !transit.is_empty())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(BodyTransit::is_empty)
    }
}

/// Horizon for forward scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanConfig {
    /// Number of future days examined, starting one day ahead.
    pub max_days: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { max_days: 28 }
    }
}

impl ScanConfig {
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.max_days == 0 {
            return Err("max_days must be greater than zero");
        }
        Ok(())
    }
}
