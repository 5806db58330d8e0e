//! Demand model: which teams must be observed in which matches.
//!
//! Produced by the demand selector, consumed by the assignment engine.
//! Both uniqueness and insertion order of a match's required teams are
//! load-bearing: later coverage rules count over the deduplicated sets,
//! and the assignment engine pairs scouters to required teams in
//! insertion order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An insertion-ordered set of required team numbers for one match.
///
/// Never exceeds the match's six teams and never holds duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredTeams {
    teams: Vec<u32>,
}

impl RequiredTeams {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a team, preserving insertion order.
    ///
    /// Returns `false` if the team was already required (a no-op).
    pub fn insert(&mut self, team_number: u32) -> bool {
        if self.teams.contains(&team_number) {
            return false;
        }
        self.teams.push(team_number);
        true
    }

    /// Whether the team is required.
    pub fn contains(&self, team_number: u32) -> bool {
        self.teams.contains(&team_number)
    }

    /// Required teams in insertion order.
    pub fn as_slice(&self) -> &[u32] {
        &self.teams
    }

    /// Number of required teams.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Whether no team is required.
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

/// Per-match demand sets plus the per-team required-occurrence counts
/// accumulated while building them.
///
/// Counts are always taken over the deduplicated sets — inserting a team
/// already required for a match changes nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemandMap {
    required: HashMap<u32, RequiredTeams>,
    scouted_counts: HashMap<u32, usize>,
}

impl DemandMap {
    /// Creates an empty demand map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a team required in a match.
    ///
    /// Returns `false` if the team was already required there; the
    /// per-team count only moves on a fresh insertion.
    pub fn insert(&mut self, team_number: u32, match_number: u32) -> bool {
        let inserted = self.required.entry(match_number).or_default().insert(team_number);
        if inserted {
            *self.scouted_counts.entry(team_number).or_insert(0) += 1;
        }
        inserted
    }

    /// Required teams for a match, in insertion order.
    pub fn required_for(&self, match_number: u32) -> &[u32] {
        self.required
            .get(&match_number)
            .map(|r| r.as_slice())
            .unwrap_or(&[])
    }

    /// Number of required teams for a match.
    pub fn required_count(&self, match_number: u32) -> usize {
        self.required.get(&match_number).map(|r| r.len()).unwrap_or(0)
    }

    /// Number of distinct required occurrences for a team.
    pub fn scouted_count(&self, team_number: u32) -> usize {
        self.scouted_counts.get(&team_number).copied().unwrap_or(0)
    }

    /// Total required slots across all matches.
    pub fn total_required(&self) -> usize {
        self.required.values().map(|r| r.len()).sum()
    }
}
