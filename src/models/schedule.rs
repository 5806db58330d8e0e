//! Match and schedule models.
//!
//! A schedule is an ordered sequence of matches, ascending by start
//! time. That order — not match number — is the authoritative iteration
//! order for every algorithm in this crate. Importers own the sorting;
//! the core assumes it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TeamInMatch;

/// One competition match with its six team slots.
///
/// Match numbers are unique across the event but not necessarily
/// contiguous.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Unique match number.
    pub match_number: u32,
    /// Scheduled start time.
    pub start_time: DateTime<Utc>,
    /// Human-readable description (e.g. "Qualification 12").
    pub description: String,
    /// Field the match is played on.
    pub field: String,
    /// Tournament level (e.g. "Qualification", "Playoff").
    pub tournament_level: String,
    /// The six team slots.
    pub teams: Vec<TeamInMatch>,
}

/// An ordered match list, ascending by start time.
pub type Schedule = Vec<Match>;

impl Match {
    /// Creates a match with no teams.
    pub fn new(match_number: u32, start_time: DateTime<Utc>) -> Self {
        Self {
            match_number,
            start_time,
            description: String::new(),
            field: String::new(),
            tournament_level: String::new(),
            teams: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the field name.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Sets the tournament level.
    pub fn with_tournament_level(mut self, level: impl Into<String>) -> Self {
        self.tournament_level = level.into();
        self
    }

    /// Adds a team slot.
    pub fn with_team(mut self, team: TeamInMatch) -> Self {
        self.teams.push(team);
        self
    }

    /// Team numbers in listing order.
    pub fn team_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.teams.iter().map(|t| t.team_number)
    }

    /// Whether the given team plays in this match.
    pub fn contains_team(&self, team_number: u32) -> bool {
        self.teams.iter().any(|t| t.team_number == team_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Station;
    use chrono::TimeZone;

    fn sample_match() -> Match {
        let mut m = Match::new(12, Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap())
            .with_description("Qualification 12")
            .with_field("Primary")
            .with_tournament_level("Qualification");
        for (i, team) in [118u32, 254, 1678, 33, 2056, 148].iter().enumerate() {
            m = m.with_team(TeamInMatch::new(*team, Station::ALL[i]));
        }
        m
    }

    #[test]
    fn test_match_builder() {
        let m = sample_match();
        assert_eq!(m.match_number, 12);
        assert_eq!(m.description, "Qualification 12");
        assert_eq!(m.tournament_level, "Qualification");
        assert_eq!(m.teams.len(), 6);
    }

    #[test]
    fn test_contains_team() {
        let m = sample_match();
        assert!(m.contains_team(254));
        assert!(!m.contains_team(9999));
    }

    #[test]
    fn test_team_numbers_listing_order() {
        let m = sample_match();
        let numbers: Vec<u32> = m.team_numbers().collect();
        assert_eq!(numbers, vec![118, 254, 1678, 33, 2056, 148]);
    }

    #[test]
    fn test_match_serde_shape() {
        let m = sample_match();
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"matchNumber\":12"));
        assert!(json.contains("\"startTime\""));
        assert!(json.contains("\"tournamentLevel\":\"Qualification\""));

        let back: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(back.match_number, 12);
        assert_eq!(back.start_time, m.start_time);
        assert_eq!(back.teams.len(), 6);
    }
}
