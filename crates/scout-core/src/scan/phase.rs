//! Scan phases and their fixed progress percentages

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single scan run, in execution order. `Cached` is the terminal
/// state of a run short-circuited by a stored scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanPhase {
    Initializing,
    Scanning,
    Analyzing,
    Documentation,
    Dependencies,
    Architecture,
    Finalizing,
    Saving,
    Complete,
    Cached,
}

impl ScanPhase {
    /// Progress reported on entering the phase
    pub fn percentage(&self) -> u8 {
        match self {
            Self::Initializing => 0,
            Self::Scanning => 10,
            Self::Analyzing => 25,
            Self::Documentation => 40,
            Self::Dependencies => 55,
            Self::Architecture => 70,
            Self::Finalizing => 90,
            Self::Saving => 95,
            Self::Complete | Self::Cached => 100,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Scanning => "scanning",
            Self::Analyzing => "analyzing",
            Self::Documentation => "documentation",
            Self::Dependencies => "dependencies",
            Self::Architecture => "architecture",
            Self::Finalizing => "finalizing",
            Self::Saving => "saving",
            Self::Complete => "complete",
            Self::Cached => "cached",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Cached)
    }
}

impl fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
