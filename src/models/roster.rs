//! Scouting roster models: the assignment output shapes.
//!
//! `ScoutingMatch` mirrors `Match` with each team slot carrying an
//! optional scouter identity. Both scheduling strategies produce this
//! shape; exporters consume it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Match, Station, TeamInMatch};

/// A team slot with an optional assigned scouter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutingTeam {
    /// Team number.
    pub team_number: u32,
    /// Station the team plays from.
    pub station: Station,
    /// Surrogate flag, carried through from the input.
    pub surrogate: bool,
    /// Assigned scouter, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scouter: Option<String>,
}

/// A match with scouters attached to its team slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutingMatch {
    /// Unique match number.
    pub match_number: u32,
    /// Scheduled start time.
    pub start_time: DateTime<Utc>,
    /// Human-readable description.
    pub description: String,
    /// Field the match is played on.
    pub field: String,
    /// Tournament level.
    pub tournament_level: String,
    /// The six team slots, each with an optional scouter.
    pub teams: Vec<ScoutingTeam>,
}

/// The final roster: same match set and order as the input schedule.
pub type ScoutingSchedule = Vec<ScoutingMatch>;

impl From<&TeamInMatch> for ScoutingTeam {
    fn from(team: &TeamInMatch) -> Self {
        Self {
            team_number: team.team_number,
            station: team.station,
            surrogate: team.surrogate,
            scouter: None,
        }
    }
}

impl ScoutingMatch {
    /// Copies a match with every team slot unassigned.
    pub fn from_match(m: &Match) -> Self {
        Self {
            match_number: m.match_number,
            start_time: m.start_time,
            description: m.description.clone(),
            field: m.field.clone(),
            tournament_level: m.tournament_level.clone(),
            teams: m.teams.iter().map(ScoutingTeam::from).collect(),
        }
    }

    /// The scouter watching a team in this match, if any.
    pub fn scouter_for(&self, team_number: u32) -> Option<&str> {
        self.teams
            .iter()
            .find(|t| t.team_number == team_number)
            .and_then(|t| t.scouter.as_deref())
    }

    /// Number of team slots with a scouter attached.
    pub fn assignment_count(&self) -> usize {
        self.teams.iter().filter(|t| t.scouter.is_some()).count()
    }
}
