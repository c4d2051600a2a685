//! Error type for report generation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sidera_core::EphemerisError;
use sidera_search::SearchError;

/// Errors from report generation or command configuration.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ReportError {
    /// Error from the scan layer.
    Search(SearchError),
    /// Command settings file is present but unusable.
    Settings(String),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "{e}"),
            Self::Settings(msg) => write!(f, "settings error: {msg}"),
        }
    }
}

impl Error for ReportError {}

impl From<SearchError> for ReportError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<EphemerisError> for ReportError {
    fn from(e: EphemerisError) -> Self {
        Self::Search(SearchError::Ephemeris(e))
    }
}
