//! Error type for scan operations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sidera_core::EphemerisError;

/// Errors from transit and aspect scans.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Error from the ephemeris layer.
    Ephemeris(EphemerisError),
    /// Invalid scan or aspect configuration.
    InvalidConfig(&'static str),
    /// Calendar arithmetic left the supported date range.
    DateOutOfRange(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::DateOutOfRange(msg) => write!(f, "date out of range: {msg}"),
        }
    }
}

impl Error for SearchError {}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
