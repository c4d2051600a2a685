//! Aspect formation/dissolution scan.
//!
//! Two passes over the horizon compare the requested day's aspect set
//! against each future day's. The exit pass dates every combination in
//! today's set at the first day it is missing; the entry pass dates every
//! combination absent today at the first day it appears. One recorded set
//! spans both passes, so each (subject, aspect, partner) combination
//! yields at most one event. Unlike the sign/station scan, both passes
//! run the whole horizon: several distinct events per body are expected
//! and must all be captured.

use std::collections::HashSet;

use chrono::NaiveDate;

use sidera_core::{ALL_BODIES, Almanac, Body, Ephemeris};

use crate::aspect::aspects;
use crate::aspect_transit_types::{
    AspectTransitSet, BodyAspectTransits, DateGroup, Direction, DirectionGroup,
};
use crate::aspect_types::{Aspect, AspectBucket, AspectClass, AspectConfig, AspectSet};
use crate::error::SearchError;
use crate::transit::future_day;
use crate::transit_types::ScanConfig;

/// One dated change of a (subject, aspect, partner) combination.
#[derive(Debug, Clone, Copy)]
struct TripleEvent {
    subject: Body,
    aspect: Aspect,
    partner: Body,
    date: NaiveDate,
    direction: Direction,
}

/// Find aspect combinations dissolving or forming within the horizon.
///
/// The same date, aspect class, and separation config are used for the
/// baseline and for every future day.
pub fn aspect_transits<E: Ephemeris>(
    almanac: &Almanac<E>,
    date: NaiveDate,
    class: AspectClass,
    scan: &ScanConfig,
    config: &AspectConfig,
) -> Result<AspectTransitSet, SearchError> {
    scan.validate().map_err(SearchError::InvalidConfig)?;

    let today = aspects(almanac, date, class, config)?;

    // One aspect set per future day, shared by both passes.
    let mut future: Vec<(NaiveDate, AspectSet)> = Vec::with_capacity(scan.max_days as usize);
    for day in 1..=scan.max_days {
        let future_date = future_day(date, day)?;
        future.push((future_date, aspects(almanac, future_date, class, config)?));
    }

    let mut recorded: HashSet<(Body, Aspect, Body)> = HashSet::new();
    let mut events: Vec<TripleEvent> = Vec::new();

    // Exit pass: combinations in today's set, dated at first absence.
    for (future_date, future_set) in &future {
        for entry in today.iter() {
            for bucket in &entry.buckets {
                for &partner in &bucket.partners {
                    let key = (entry.body, bucket.aspect, partner);
                    if recorded.contains(&key) {
                        continue;
                    }
                    if !future_set.has_pair(entry.body, bucket.aspect, partner) {
                        recorded.insert(key);
                        events.push(TripleEvent {
                            subject: entry.body,
                            aspect: bucket.aspect,
                            partner,
                            date: *future_date,
                            direction: Direction::Exiting,
                        });
                    }
                }
            }
        }
    }

    // Entry pass: combinations absent today, dated at first appearance.
    for (future_date, future_set) in &future {
        for entry in future_set.iter() {
            for bucket in &entry.buckets {
                for &partner in &bucket.partners {
                    let key = (entry.body, bucket.aspect, partner);
                    if recorded.contains(&key) {
                        continue;
                    }
                    if !today.has_pair(entry.body, bucket.aspect, partner) {
                        recorded.insert(key);
                        events.push(TripleEvent {
                            subject: entry.body,
                            aspect: bucket.aspect,
                            partner,
                            date: *future_date,
                            direction: Direction::Entering,
                        });
                    }
                }
            }
        }
    }

    Ok(pivot(&events))
}

/// Reorganize flat events into subject -> direction -> date -> aspect.
///
/// Event order within a subject is preserved, which keeps exiting groups
/// ahead of entering ones and dates ascending within each direction.
fn pivot(events: &[TripleEvent]) -> AspectTransitSet {
    let mut set = AspectTransitSet::default();

    for body in ALL_BODIES {
        let mut directions: Vec<DirectionGroup> = Vec::new();
        for event in events.iter().filter(|event| event.subject == body) {
            let d = match directions
                .iter()
                .position(|group| group.direction == event.direction)
            {
                Some(i) => i,
                None => {
                    directions.push(DirectionGroup {
                        direction: event.direction,
                        dates: Vec::new(),
                    });
                    directions.len() - 1
                }
            };
            let dates = &mut directions[d].dates;
            let t = match dates.iter().position(|group| group.date == event.date) {
                Some(i) => i,
                None => {
                    dates.push(DateGroup {
                        date: event.date,
                        buckets: Vec::new(),
                    });
                    dates.len() - 1
                }
            };
            let buckets = &mut dates[t].buckets;
            match buckets
                .iter()
                .position(|bucket| bucket.aspect == event.aspect)
            {
                Some(i) => buckets[i].partners.push(event.partner),
                None => buckets.push(AspectBucket {
                    aspect: event.aspect,
                    partners: vec![event.partner],
                }),
            }
        }
        if !directions.is_empty() {
            set.push(BodyAspectTransits { body, directions });
        }
    }

    set
}
