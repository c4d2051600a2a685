//! Golden scenarios for pairwise aspect computation.

use chrono::NaiveDate;
use sidera_core::{Almanac, Body, RawPosition, TableEphemeris};
use sidera_search::{Aspect, AspectClass, AspectConfig, AspectSet, aspects};

/// The 12 bodies a provider is queried for, in canonical order.
const QUERY_BODIES: [Body; 12] = [
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
    Body::NorthNode,
];

fn day0() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()
}

/// Single-day almanac with explicit longitudes per body, direct motion.
fn sky(place: impl Fn(Body) -> f64) -> Almanac<TableEphemeris> {
    let rows = QUERY_BODIES.map(|body| {
        (
            day0(),
            body,
            RawPosition {
                lon_deg: place(body),
                speed_deg_per_day: 1.0,
            },
        )
    });
    Almanac::new(TableEphemeris::from_rows(rows))
}

/// Longitudes that spread the uninvolved bodies far from the test pair.
fn quiet(body: Body) -> f64 {
    // every body stacked on 340 forms stable conjunctions with its
    // neighbors and nothing with the pairs under test
    match body {
        Body::NorthNode => 50.0,
        _ => 340.0,
    }
}

fn major(almanac: &Almanac<TableEphemeris>) -> AspectSet {
    aspects(almanac, day0(), AspectClass::Major, &AspectConfig::default()).unwrap()
}

#[test]
fn conjunction_orb_boundary_is_exclusive() {
    // diff of exactly 10 deg misses the conjunction orb
    let at_boundary = sky(|body| match body {
        Body::Sun => 0.0,
        Body::Mercury => 10.0,
        other => quiet(other),
    });
    assert!(!major(&at_boundary).has_pair(Body::Sun, Aspect::Conjunction, Body::Mercury));

    // just inside forms it
    let inside = sky(|body| match body {
        Body::Sun => 0.0,
        Body::Mercury => 9.99,
        other => quiet(other),
    });
    assert!(major(&inside).has_pair(Body::Sun, Aspect::Conjunction, Body::Mercury));
}

#[test]
fn unreduced_separation_forms_conjunction_across_the_seam() {
    let almanac = sky(|body| match body {
        Body::Sun => 356.0,
        Body::Mercury => 1.0,
        other => quiet(other),
    });
    // |356 - 1| = 355 sits in the wrapped half of the conjunction window
    assert!(major(&almanac).has_pair(Body::Sun, Aspect::Conjunction, Body::Mercury));
}

#[test]
fn unreduced_separation_misses_a_true_trine_across_the_seam() {
    let almanac = sky(|body| match body {
        Body::Sun => 2.0,
        Body::Mars => 240.0,
        other => quiet(other),
    });
    // raw diff is 238; the true angular separation is 122
    let unreduced = major(&almanac);
    assert!(!unreduced.has_pair(Body::Sun, Aspect::Trine, Body::Mars));

    let normalized = aspects(
        &almanac,
        day0(),
        AspectClass::Major,
        &AspectConfig {
            normalize_separation: true,
        },
    )
    .unwrap();
    assert!(normalized.has_pair(Body::Sun, Aspect::Trine, Body::Mars));
}

#[test]
fn nodes_never_participate() {
    // North Node parked at a sextile distance from the Sun
    let almanac = sky(|body| match body {
        Body::Sun => 0.0,
        Body::NorthNode => 60.0,
        other => quiet(other),
    });
    let set = major(&almanac);
    assert!(!set.has_body(Body::NorthNode));
    assert!(!set.has_body(Body::SouthNode));
    for entry in set.iter() {
        for bucket in &entry.buckets {
            assert!(bucket.partners.iter().all(|partner| !partner.is_node()));
        }
    }
}

#[test]
fn pair_recorded_under_the_earlier_body_only() {
    let almanac = sky(|body| match body {
        Body::Sun => 0.0,
        Body::Moon => 120.0,
        other => quiet(other),
    });
    let set = major(&almanac);
    assert!(set.has_pair(Body::Sun, Aspect::Trine, Body::Moon));
    // the Moon's own entry, if any, never repeats the Sun pairing
    if let Some(moon) = set.get(Body::Moon) {
        for bucket in &moon.buckets {
            assert!(!bucket.partners.contains(&Body::Sun));
        }
    }
}

#[test]
fn partners_collect_in_canonical_order() {
    let almanac = sky(|body| match body {
        Body::Sun => 0.0,
        Body::Mars => 115.0,
        Body::Jupiter => 125.0,
        other => quiet(other),
    });
    let set = major(&almanac);
    let sun = set.get(Body::Sun).unwrap();
    let trine = sun
        .buckets
        .iter()
        .find(|bucket| bucket.aspect == Aspect::Trine)
        .unwrap();
    assert_eq!(trine.partners, vec![Body::Mars, Body::Jupiter]);
}

#[test]
fn minor_table_is_disjoint_from_major() {
    let almanac = sky(|body| match body {
        Body::Sun => 0.0,
        Body::Venus => 45.0,
        other => quiet(other),
    });
    let major_set = major(&almanac);
    assert!(!major_set.has_body(Body::Sun) || !major_set.has_aspect(Body::Sun, Aspect::SemiSquare));

    let minor_set = aspects(
        &almanac,
        day0(),
        AspectClass::Minor,
        &AspectConfig::default(),
    )
    .unwrap();
    assert!(minor_set.has_pair(Body::Sun, Aspect::SemiSquare, Body::Venus));
}

#[test]
fn aspect_free_bodies_are_omitted() {
    // Sun alone at 170 deg: nothing is in orb of it, and it is in orb
    // of nothing
    let almanac = sky(|body| match body {
        Body::Sun => 170.0,
        other => quiet(other),
    });
    assert!(!major(&almanac).has_body(Body::Sun));
}
