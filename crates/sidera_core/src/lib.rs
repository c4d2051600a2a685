//! Core vocabulary and memoized position store for the transiting sky.
//!
//! This crate provides:
//! - The tracked [`Body`] set and [`Sign`] bucketing
//! - The [`Ephemeris`] seam to an external astronomical library
//! - The [`Almanac`]: whole-sky snapshots memoized per day
//! - A file-backed [`TableEphemeris`] provider for hosts and tests

pub mod almanac;
pub mod body;
pub mod ephemeris;
pub mod error;
pub mod snapshot;
pub mod table;
pub mod zodiac;

pub use almanac::Almanac;
pub use body::{ALL_BODIES, Body};
pub use ephemeris::{Ephemeris, RawPosition, raw_position};
pub use error::EphemerisError;
pub use snapshot::{Position, RawSnapshot, Snapshot};
pub use table::TableEphemeris;
pub use zodiac::{ALL_SIGNS, Sign};
