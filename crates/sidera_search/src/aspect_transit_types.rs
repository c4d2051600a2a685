//! Types for aspect formation/dissolution scans.

use chrono::NaiveDate;

use sidera_core::Body;

use crate::aspect_types::AspectBucket;

/// Whether an aspect combination is dissolving or forming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Present today, gone on the event date.
    Exiting,
    /// Absent today, formed on the event date.
    Entering,
}

impl Direction {
    /// Verb used in report text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exiting => "exiting",
            Self::Entering => "entering",
        }
    }
}

/// Aspect changes sharing one date under one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup {
    pub date: NaiveDate,
    /// Changed aspects in discovery order.
    pub buckets: Vec<AspectBucket>,
}

/// All dated changes in one direction for one subject body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionGroup {
    pub direction: Direction,
    /// Dates in ascending order.
    pub dates: Vec<DateGroup>,
}

/// Aspect changes for one subject body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyAspectTransits {
    pub body: Body,
    /// Exiting changes, when present, precede entering ones.
    pub directions: Vec<DirectionGroup>,
}

/// Projected aspect changes, one entry per body with any change.
///
/// Bodies follow canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AspectTransitSet {
    entries: Vec<BodyAspectTransits>,
}

impl AspectTransitSet {
    pub(crate) fn push(&mut self, entry: BodyAspectTransits) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyAspectTransits> {
        self.entries.iter()
    }

    pub fn get(&self, body: Body) -> Option<&BodyAspectTransits> {
        self.entries.iter().find(|entry| entry.body == body)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
