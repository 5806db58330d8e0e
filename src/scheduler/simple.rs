//! Positional round-robin scheduler.
//!
//! The low-effort alternative to demand-driven assignment: every team
//! slot of every match gets a scouter, purely by position. Slot `i`
//! takes `roster[i mod len]`, and the working roster rotates left by a
//! full six positions after each match whose number divides evenly by
//! the rotation interval. Shares the assignment engine's output
//! contract and nothing else.

use serde::{Deserialize, Serialize};

use crate::models::{Match, ScoutingMatch, ScoutingSchedule};

/// Round-robin scheduler with a configurable rotation interval.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimpleScheduler {
    /// Rotate the roster after matches whose number is divisible by
    /// this. Zero never rotates.
    pub rotate_after: u32,
}

impl Default for SimpleScheduler {
    fn default() -> Self {
        Self { rotate_after: 4 }
    }
}

impl SimpleScheduler {
    /// Creates a scheduler with the default rotation interval.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rotation interval.
    pub fn with_rotate_after(mut self, rotate_after: u32) -> Self {
        self.rotate_after = rotate_after;
        self
    }

    /// Assigns the roster positionally to every slot of every match.
    ///
    /// An empty roster yields the schedule with no assignments.
    pub fn schedule(&self, schedule: &[Match], roster: &[String]) -> ScoutingSchedule {
        let mut rotation: Vec<String> = roster.to_vec();
        let mut result = Vec::with_capacity(schedule.len());

        for m in schedule {
            let mut out = ScoutingMatch::from_match(m);
            for (i, team) in out.teams.iter_mut().enumerate() {
                team.scouter = if rotation.is_empty() {
                    None
                } else {
                    Some(rotation[i % rotation.len()].clone())
                };
            }
            result.push(out);

            if self.rotate_after != 0
                && m.match_number % self.rotate_after == 0
                && !rotation.is_empty()
            {
                let shift = 6 % rotation.len();
                rotation.rotate_left(shift);
            }
        }
        result
    }
}
