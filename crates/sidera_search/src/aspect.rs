//! Pairwise aspect computation for one day.
//!
//! Separations come from the raw longitudes, not the sign buckets. The
//! scan walks an explicit half matrix: the body at index i is compared
//! only against bodies at later indexes, so each unordered pair is tested
//! once and recorded under the earlier body. Both lunar nodes sit outside
//! the participant list entirely.

use chrono::NaiveDate;

use sidera_core::{Almanac, Body, Ephemeris};

use crate::aspect_types::{
    Aspect, AspectBucket, AspectClass, AspectConfig, AspectSet, BodyAspects,
};
use crate::error::SearchError;

/// The 11 bodies that participate in aspects, in canonical order.
pub const ASPECT_BODIES: [Body; 11] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::Chiron,
];

/// Compute the aspect set for one day.
///
/// A body with no aspects in orb is absent from the result.
pub fn aspects<E: Ephemeris>(
    almanac: &Almanac<E>,
    date: NaiveDate,
    class: AspectClass,
    config: &AspectConfig,
) -> Result<AspectSet, SearchError> {
    let raw = almanac.raw_snapshot(date)?;
    let mut set = AspectSet::default();

    for (i, &subject) in ASPECT_BODIES.iter().enumerate() {
        let mut buckets: Vec<AspectBucket> = Vec::new();
        for &partner in &ASPECT_BODIES[i + 1..] {
            let separation =
                separation_deg(raw.get(subject).lon_deg, raw.get(partner).lon_deg, config);
            for &aspect in class.aspects() {
                if within_orb(aspect, separation) {
                    match buckets.iter().position(|bucket| bucket.aspect == aspect) {
                        Some(i) => buckets[i].partners.push(partner),
                        None => buckets.push(AspectBucket {
                            aspect,
                            partners: vec![partner],
                        }),
                    }
                }
            }
        }
        if !buckets.is_empty() {
            set.push(BodyAspects {
                body: subject,
                buckets,
            });
        }
    }

    Ok(set)
}

/// Absolute longitude difference; optionally reduced to [0, 180].
fn separation_deg(lon_a: f64, lon_b: f64, config: &AspectConfig) -> f64 {
    let diff = (lon_a - lon_b).abs();
    if config.normalize_separation && diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Strict orb-window test.
///
/// The window is (angle - orb, angle + orb) taken mod 360; when it wraps
/// the 0/360 seam (the conjunction's lower edge) membership becomes
/// "above the low edge or below the high edge". Exact boundary values
/// are excluded on both sides.
fn within_orb(aspect: Aspect, separation: f64) -> bool {
    let lo = (aspect.angle_deg() - aspect.orb_deg()).rem_euclid(360.0);
    let hi = (aspect.angle_deg() + aspect.orb_deg()).rem_euclid(360.0);
    if lo < hi {
        lo < separation && separation < hi
    } else {
        separation > lo || separation < hi
    }
}
