//! Scouting domain models.
//!
//! Core data types for representing match schedules, per-match demand,
//! and the assigned roster. All models serialize in the upstream JSON
//! document shape (camelCase fields, bare station names).
//!
//! Every model is an immutable input or is built fresh per scheduling
//! run; nothing persists across runs.

mod demand;
mod roster;
mod schedule;
mod team;

pub use demand::{DemandMap, RequiredTeams};
pub use roster::{ScoutingMatch, ScoutingSchedule, ScoutingTeam};
pub use schedule::{Match, Schedule};
pub use team::{Station, TeamInMatch};
