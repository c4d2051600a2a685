//! Report rendering and the memoizing reporter.
//!
//! Each renderer turns one structured result into newline-terminated
//! text; the chat layer sends every line as its own message. [`Reporter`]
//! fronts the almanac and scanners, caching finished report strings by
//! their full argument tuple so a repeated chat command costs one map
//! lookup.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;

use sidera_core::{Almanac, Ephemeris, Snapshot};
use sidera_search::{
    AspectClass, AspectConfig, AspectSet, AspectTransitSet, ScanConfig, Station, TransitSet,
    aspect_transits, aspects, transits,
};

use crate::error::ReportError;
use crate::list::join_list;

/// Bodies per line in the positions report: 13 bodies over 5 rows.
const POSITION_ROWS: [usize; 5] = [2, 3, 3, 3, 2];

/// Render a date as abbreviated month and unpadded day ("Jan 5").
fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Retrograde summary line plus grouped position rows.
pub fn positions_report(snapshot: &Snapshot) -> String {
    let retrograde: Vec<&str> = snapshot
        .retrograde_bodies()
        .map(|body| body.name())
        .collect();
    let phrases: Vec<String> = snapshot
        .iter()
        .map(|(body, position)| format!("{} is in {}", body.name(), position.sign.name()))
        .collect();

    let mut out = join_list(&retrograde, true);
    out.push_str("in Retrograde\n");

    let mut start = 0;
    for width in POSITION_ROWS {
        out.push_str(&phrases[start..start + width].join(", "));
        out.push('\n');
        start += width;
    }
    out
}

/// One line per body with a pending sign ingress or station.
pub fn transits_report(set: &TransitSet) -> String {
    let mut out = String::new();
    for (body, transit) in set.iter() {
        if let Some(ingress) = transit.ingress {
            out.push_str(&format!(
                "{} is entering {} on {}\n",
                body.name(),
                ingress.sign.name(),
                short_date(ingress.date)
            ));
        }
        if let Some(event) = transit.station {
            let verb = match event.station {
                Station::Retrograde => "entering",
                Station::Direct => "exiting",
            };
            out.push_str(&format!(
                "{} is {} Retrograde on {}\n",
                body.name(),
                verb,
                short_date(event.date)
            ));
        }
    }
    out
}

/// One line per body listing its current aspects.
pub fn aspects_report(set: &AspectSet) -> String {
    let mut out = String::new();
    for entry in set.iter() {
        let phrases: Vec<String> = entry
            .buckets
            .iter()
            .map(|bucket| {
                let partners: Vec<&str> =
                    bucket.partners.iter().map(|partner| partner.name()).collect();
                format!("{} with {}", bucket.aspect.name(), join_list(&partners, false))
            })
            .collect();
        out.push_str(&format!(
            "{} is in {}\n",
            entry.body.name(),
            join_list(&phrases, false)
        ));
    }
    out
}

/// One line per body listing entering/exiting aspect changes.
pub fn aspect_transits_report(set: &AspectTransitSet) -> String {
    let mut out = String::new();
    for entry in set.iter() {
        let direction_phrases: Vec<String> = entry
            .directions
            .iter()
            .map(|group| {
                let date_phrases: Vec<String> = group
                    .dates
                    .iter()
                    .map(|dated| {
                        let aspect_phrases: Vec<String> = dated
                            .buckets
                            .iter()
                            .map(|bucket| {
                                let partners: Vec<&str> = bucket
                                    .partners
                                    .iter()
                                    .map(|partner| partner.name())
                                    .collect();
                                format!(
                                    "{} with {}",
                                    bucket.aspect.name(),
                                    join_list(&partners, false)
                                )
                            })
                            .collect();
                        format!(
                            "{} on {}",
                            join_list(&aspect_phrases, false),
                            short_date(dated.date)
                        )
                    })
                    .collect();
                format!("{} {}", group.direction.label(), join_list(&date_phrases, false))
            })
            .collect();
        out.push_str(&format!(
            "{} is {}\n",
            entry.body.name(),
            join_list(&direction_phrases, false)
        ));
    }
    out
}

/// Memoizing front end over the almanac and scanners.
///
/// Report strings are pure functions of their arguments, so the caches
/// are append-only and write-once per key, like the almanac's own. The
/// reporter is `Send + Sync`; a chat task can hold it in an `Arc` and
/// answer repeated commands without recomputing anything.
pub struct Reporter<E> {
    almanac: Almanac<E>,
    positions: Mutex<HashMap<NaiveDate, String>>,
    transits: Mutex<HashMap<(NaiveDate, u32), String>>,
    aspects: Mutex<HashMap<(NaiveDate, AspectClass), String>>,
    aspect_transits: Mutex<HashMap<(NaiveDate, AspectClass, u32), String>>,
}

impl<E: Ephemeris> Reporter<E> {
    pub fn new(provider: E) -> Self {
        Self {
            almanac: Almanac::new(provider),
            positions: Mutex::new(HashMap::new()),
            transits: Mutex::new(HashMap::new()),
            aspects: Mutex::new(HashMap::new()),
            aspect_transits: Mutex::new(HashMap::new()),
        }
    }

    pub fn almanac(&self) -> &Almanac<E> {
        &self.almanac
    }

    /// Positions report for one day.
    pub fn positions(&self, date: NaiveDate) -> Result<String, ReportError> {
        if let Some(text) = lock(&self.positions).get(&date) {
            return Ok(text.clone());
        }
        let text = positions_report(&self.almanac.snapshot(date)?);
        Ok(lock(&self.positions).entry(date).or_insert(text).clone())
    }

    /// Sign-ingress and station report for one day.
    pub fn transits(&self, date: NaiveDate, scan: &ScanConfig) -> Result<String, ReportError> {
        let key = (date, scan.max_days);
        if let Some(text) = lock(&self.transits).get(&key) {
            return Ok(text.clone());
        }
        let text = transits_report(&transits(&self.almanac, date, scan)?);
        Ok(lock(&self.transits).entry(key).or_insert(text).clone())
    }

    /// Aspect report for one day against the chosen table.
    pub fn aspects(&self, date: NaiveDate, class: AspectClass) -> Result<String, ReportError> {
        let key = (date, class);
        if let Some(text) = lock(&self.aspects).get(&key) {
            return Ok(text.clone());
        }
        let set = aspects(&self.almanac, date, class, &AspectConfig::default())?;
        let text = aspects_report(&set);
        Ok(lock(&self.aspects).entry(key).or_insert(text).clone())
    }

    /// Aspect change report for one day against the chosen table.
    pub fn aspect_transits(
        &self,
        date: NaiveDate,
        class: AspectClass,
        scan: &ScanConfig,
    ) -> Result<String, ReportError> {
        let key = (date, class, scan.max_days);
        if let Some(text) = lock(&self.aspect_transits).get(&key) {
            return Ok(text.clone());
        }
        let set = aspect_transits(&self.almanac, date, class, scan, &AspectConfig::default())?;
        let text = aspect_transits_report(&set);
        Ok(lock(&self.aspect_transits)
            .entry(key)
            .or_insert(text)
            .clone())
    }
}

/// Recover the guard from a poisoned lock; entries are write-once.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
