//! Day-granular memoized snapshot store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;

use crate::body::{ALL_BODIES, Body};
use crate::ephemeris::{Ephemeris, RawPosition};
use crate::error::EphemerisError;
use crate::snapshot::{RawSnapshot, Snapshot};

/// Memoizing facade over an ephemeris provider.
///
/// Snapshots are pure functions of their date, so the caches are
/// append-only and write-once per key: an entry is never invalidated or
/// evicted. `Almanac` is `Send + Sync` and can be shared across threads
/// via `Arc<Almanac<_>>`; locks are held only around map access, never
/// across provider calls.
pub struct Almanac<E> {
    provider: E,
    raw: Mutex<HashMap<NaiveDate, RawSnapshot>>,
    classified: Mutex<HashMap<NaiveDate, Snapshot>>,
}

impl<E: Ephemeris> Almanac<E> {
    pub fn new(provider: E) -> Self {
        Self {
            provider,
            raw: Mutex::new(HashMap::new()),
            classified: Mutex::new(HashMap::new()),
        }
    }

    pub fn provider(&self) -> &E {
        &self.provider
    }

    /// Raw positions of all 13 tracked bodies for one day.
    ///
    /// Queries the provider once per direct body on first use; the South
    /// Node is derived from the North Node already in hand. Any single
    /// body failure fails the whole snapshot and caches nothing.
    pub fn raw_snapshot(&self, date: NaiveDate) -> Result<RawSnapshot, EphemerisError> {
        if let Some(snap) = lock(&self.raw).get(&date) {
            return Ok(*snap);
        }

        let mut positions = [RawPosition {
            lon_deg: 0.0,
            speed_deg_per_day: 0.0,
        }; Body::COUNT];
        for body in ALL_BODIES {
            positions[body.index()] = match body {
                // NorthNode precedes SouthNode in canonical order
                Body::SouthNode => positions[Body::NorthNode.index()].antipode(),
                _ => self.provider.longitude_and_speed(date, body)?,
            };
        }

        let snap = RawSnapshot::new(date, positions);
        Ok(*lock(&self.raw).entry(date).or_insert(snap))
    }

    /// Sign/retrograde snapshot for one day.
    pub fn snapshot(&self, date: NaiveDate) -> Result<Snapshot, EphemerisError> {
        if let Some(snap) = lock(&self.classified).get(&date) {
            return Ok(*snap);
        }
        let snap = self.raw_snapshot(date)?.classify();
        Ok(*lock(&self.classified).entry(date).or_insert(snap))
    }
}

/// Recover the guard from a poisoned lock. Entries are write-once values
/// inserted whole, so a panicked holder cannot leave a torn entry behind.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
