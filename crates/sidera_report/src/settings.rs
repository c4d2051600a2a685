//! Chat command configuration.
//!
//! The host maps incoming chat lines to reports through a small TOML
//! file. A missing file means stock commands; a present but malformed
//! file is an error the host should surface, not paper over.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use sidera_search::AspectClass;

use crate::error::ReportError;

/// Which report a chat command requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Positions,
    Transits,
    Aspects(AspectClass),
    AspectTransits(AspectClass),
}

/// Trigger strings for the six chat commands.
///
/// Fields absent from the file keep their stock `!`-prefixed triggers,
/// so a partial config is fine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CommandSettings {
    pub positions: String,
    pub transits: String,
    pub major_aspects: String,
    pub minor_aspects: String,
    pub major_aspect_transits: String,
    pub minor_aspect_transits: String,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            positions: "!positions".into(),
            transits: "!transits".into(),
            major_aspects: "!aspects major".into(),
            minor_aspects: "!aspects minor".into(),
            major_aspect_transits: "!aspects major transits".into(),
            minor_aspect_transits: "!aspects minor transits".into(),
        }
    }
}

impl CommandSettings {
    /// Parse settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ReportError> {
        toml::from_str(text).map_err(|e| ReportError::Settings(e.to_string()))
    }

    /// Load settings from a file, falling back to defaults when absent.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ReportError::Settings(format!("{}: {e}", path.display()))),
        }
    }

    /// Map an incoming chat line to the report it requests.
    ///
    /// Matching is exact, like the original dispatcher: no prefixes, no
    /// case folding.
    pub fn match_command(&self, text: &str) -> Option<ReportKind> {
        if text == self.positions {
            Some(ReportKind::Positions)
        } else if text == self.transits {
            Some(ReportKind::Transits)
        } else if text == self.major_aspects {
            Some(ReportKind::Aspects(AspectClass::Major))
        } else if text == self.minor_aspects {
            Some(ReportKind::Aspects(AspectClass::Minor))
        } else if text == self.major_aspect_transits {
            Some(ReportKind::AspectTransits(AspectClass::Major))
        } else if text == self.minor_aspect_transits {
            Some(ReportKind::AspectTransits(AspectClass::Minor))
        } else {
            None
        }
    }
}
