//! Team-in-match model.
//!
//! A match fields exactly six teams, three per alliance, each occupying
//! a numbered station. Station identity is unique within a match and
//! defines the canonical column order for exported documents.

use serde::{Deserialize, Serialize};

/// A field station: alliance color plus position 1–3.
///
/// Ordering is red before blue, position ascending. Exporters and the
/// round-robin scheduler rely on this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Station {
    Red1,
    Red2,
    Red3,
    Blue1,
    Blue2,
    Blue3,
}

impl Station {
    /// All stations in canonical order.
    pub const ALL: [Station; 6] = [
        Station::Red1,
        Station::Red2,
        Station::Red3,
        Station::Blue1,
        Station::Blue2,
        Station::Blue3,
    ];

    /// Human-readable label (e.g. "Red 1").
    pub fn label(&self) -> &'static str {
        match self {
            Station::Red1 => "Red 1",
            Station::Red2 => "Red 2",
            Station::Red3 => "Red 3",
            Station::Blue1 => "Blue 1",
            Station::Blue2 => "Blue 2",
            Station::Blue3 => "Blue 3",
        }
    }

    /// Whether this station belongs to the red alliance.
    pub fn is_red(&self) -> bool {
        matches!(self, Station::Red1 | Station::Red2 | Station::Red3)
    }
}

/// A team occupying one station of one match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInMatch {
    /// Team number. Unique within a match's six slots, not necessarily
    /// across the event.
    pub team_number: u32,
    /// Station the team plays from.
    pub station: Station,
    /// Whether the team plays this match as a substitute. Carried
    /// through unchanged; no scheduling logic reads it.
    pub surrogate: bool,
}

impl TeamInMatch {
    /// Creates a non-surrogate team slot.
    pub fn new(team_number: u32, station: Station) -> Self {
        Self {
            team_number,
            station,
            surrogate: false,
        }
    }

    /// Sets the surrogate flag.
    pub fn with_surrogate(mut self, surrogate: bool) -> Self {
        self.surrogate = surrogate;
        self
    }
}
