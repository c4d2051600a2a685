//! Forward-looking scans over the transiting sky.
//!
//! This crate provides:
//! - Sign-ingress and retrograde-station detection per body
//! - Pairwise aspect computation against the major or minor table
//! - Aspect formation/dissolution detection over a bounded horizon

pub mod aspect;
pub mod aspect_transit;
pub mod aspect_transit_types;
pub mod aspect_types;
pub mod error;
pub mod transit;
pub mod transit_types;

pub use aspect::{ASPECT_BODIES, aspects};
pub use aspect_transit::aspect_transits;
pub use aspect_transit_types::{
    AspectTransitSet, BodyAspectTransits, DateGroup, Direction, DirectionGroup,
};
pub use aspect_types::{
    Aspect, AspectBucket, AspectClass, AspectConfig, AspectSet, BodyAspects, MAJOR_ASPECTS,
    MINOR_ASPECTS,
};
pub use error::SearchError;
pub use transit::transits;
pub use transit_types::{BodyTransit, ScanConfig, SignIngress, Station, StationEvent, TransitSet};
