//! Aspect vocabulary and per-day aspect sets.

use sidera_core::Body;

/// Angular relationships tested between body pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aspect {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    SemiSextile,
    Inconjunct,
    SemiSquare,
    Trioctile,
    Quintile,
    Biquintile,
}

/// The major aspect table.
pub const MAJOR_ASPECTS: [Aspect; 5] = [
    Aspect::Conjunction,
    Aspect::Opposition,
    Aspect::Trine,
    Aspect::Square,
    Aspect::Sextile,
];

/// The minor aspect table.
pub const MINOR_ASPECTS: [Aspect; 6] = [
    Aspect::SemiSextile,
    Aspect::Inconjunct,
    Aspect::SemiSquare,
    Aspect::Trioctile,
    Aspect::Quintile,
    Aspect::Biquintile,
];

impl Aspect {
    /// Display name used in report text.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Opposition => "opposition",
            Self::Trine => "trine",
            Self::Square => "square",
            Self::Sextile => "sextile",
            Self::SemiSextile => "semi-sextile",
            Self::Inconjunct => "inconjunct",
            Self::SemiSquare => "semi-square",
            Self::Trioctile => "trioctile",
            Self::Quintile => "quintile",
            Self::Biquintile => "biquintile",
        }
    }

    /// Exact angle in degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Trine => 120.0,
            Self::Square => 90.0,
            Self::Sextile => 60.0,
            Self::SemiSextile => 30.0,
            Self::Inconjunct => 150.0,
            Self::SemiSquare => 45.0,
            Self::Trioctile => 135.0,
            Self::Quintile => 72.0,
            Self::Biquintile => 144.0,
        }
    }

    /// Allowed deviation from the exact angle, in degrees.
    pub const fn orb_deg(self) -> f64 {
        match self {
            Self::Conjunction => 10.0,
            Self::Opposition => 10.0,
            Self::Trine => 10.0,
            Self::Square => 10.0,
            Self::Sextile => 5.0,
            Self::SemiSextile => 1.5,
            Self::Inconjunct => 3.0,
            Self::SemiSquare => 3.0,
            Self::Trioctile => 3.0,
            Self::Quintile => 1.0,
            Self::Biquintile => 1.0,
        }
    }
}

/// Which aspect table a computation uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectClass {
    Major,
    Minor,
}

impl AspectClass {
    /// The aspect definitions in this table.
    pub const fn aspects(self) -> &'static [Aspect] {
        match self {
            Self::Major => &MAJOR_ASPECTS,
            Self::Minor => &MINOR_ASPECTS,
        }
    }
}

/// Tuning for the pairwise separation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AspectConfig {
    /// Reduce separations to [0, 180] before testing orbs.
    ///
    /// Off by default: the unreduced absolute difference is long-standing
    /// observable behavior, kept for output compatibility even though it
    /// misses some pairings across the 0/360 seam.
    pub normalize_separation: bool,
}

/// One aspect bucket under a subject body: the aspect and its partners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AspectBucket {
    pub aspect: Aspect,
    /// Partner bodies in discovery order.
    pub partners: Vec<Body>,
}

/// All aspects one subject body forms, buckets in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyAspects {
    pub body: Body,
    pub buckets: Vec<AspectBucket>,
}

/// Aspects formed on one day, one entry per body with any aspect.
///
/// Each unordered pair is recorded once, under whichever body comes
/// first in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AspectSet {
    entries: Vec<BodyAspects>,
}

impl AspectSet {
    pub(crate) fn push(&mut self, entry: BodyAspects) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyAspects> {
        self.entries.iter()
    }

    pub fn get(&self, body: Body) -> Option<&BodyAspects> {
        self.entries.iter().find(|entry| entry.body == body)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the subject body forms any aspect.
    pub fn has_body(&self, body: Body) -> bool {
        self.get(body).is_some()
    }

    /// Whether the subject body forms this aspect with anyone.
    pub fn has_aspect(&self, body: Body, aspect: Aspect) -> bool {
        self.get(body)
            .is_some_and(|entry| entry.buckets.iter().any(|b| b.aspect == aspect))
    }

    /// Whether this exact (subject, aspect, partner) combination exists.
    pub fn has_pair(&self, body: Body, aspect: Aspect, partner: Body) -> bool {
        self.get(body).is_some_and(|entry| {
            entry
                .buckets
                .iter()
                .any(|b| b.aspect == aspect && b.partners.contains(&partner))
        })
    }
}
