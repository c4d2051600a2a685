//! Error types for ephemeris access.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::body::Body;

/// Errors from an ephemeris provider or the almanac.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The backing data source is missing or unreadable.
    Unavailable(String),
    /// The source has no entry for this body on this date.
    DateNotCovered { body: Body, date: NaiveDate },
    /// A derived body was requested directly from a provider.
    UnsupportedBody(Body),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "ephemeris unavailable: {msg}"),
            Self::DateNotCovered { body, date } => {
                write!(f, "no ephemeris entry for {} on {date}", body.name())
            }
            Self::UnsupportedBody(body) => {
                write!(f, "{} is a derived point, not a provider body", body.name())
            }
        }
    }
}

impl Error for EphemerisError {}
