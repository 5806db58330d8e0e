//! Demand-driven scouter assignment with rotation limits.
//!
//! Maps a finite scouter roster onto per-match demand across time,
//! completing in-progress shifts before starting new ones and balancing
//! lifetime load. Two consecutive-use thresholds govern eligibility:
//! past the soft limit a scouter is only drafted when the soft-limited
//! pool cannot cover demand; past the hard limit, never — uncovered
//! demand is accepted degraded output, not an error.
//!
//! # Algorithm
//!
//! Per match, in schedule order:
//! 1. Pool scouters under the soft limit; widen to the hard limit only
//!    if the pool is smaller than the match's demand.
//! 2. Sort the pool by `(shift state, consecutive, total)` — mid-shift
//!    before fresh before exhausted, then fresher first, then lightest
//!    lifetime load. Roster order seeds remaining ties.
//! 3. Pair required teams with the sorted pool in lockstep.
//! 4. Bump counters for assigned scouters; reset the consecutive
//!    counter of every unassigned roster member.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::demand::{CoverageConfig, DemandSelector};
use crate::models::{DemandMap, Match, ScoutingMatch, ScoutingSchedule};

/// Consecutive-use thresholds for scouter rotation.
///
/// The semantics assume `soft_limit <= hard_limit`; the engine does not
/// enforce the ordering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RotationLimits {
    /// Consecutive matches after which a scouter is rotated out when
    /// the remaining pool can cover demand.
    pub soft_limit: usize,
    /// Consecutive matches after which a scouter is never assigned.
    pub hard_limit: usize,
}

impl Default for RotationLimits {
    fn default() -> Self {
        Self {
            soft_limit: 4,
            hard_limit: 8,
        }
    }
}

impl RotationLimits {
    /// Creates rotation limits.
    pub fn new(soft_limit: usize, hard_limit: usize) -> Self {
        Self {
            soft_limit,
            hard_limit,
        }
    }
}

/// Rotation state of one scouter entering a match, derived from its
/// consecutive-use counter against the soft limit.
///
/// The variant order is the candidate sort order: in-progress shifts
/// are completed before new ones begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum ShiftState {
    /// Shift in progress: `0 < consecutive < soft_limit`.
    MidShift,
    /// Not currently scouting: `consecutive == 0`.
    Fresh,
    /// At or past the soft limit.
    Exhausted,
}

impl ShiftState {
    fn of(consecutive: usize, soft_limit: usize) -> Self {
        if consecutive == 0 {
            ShiftState::Fresh
        } else if consecutive < soft_limit {
            ShiftState::MidShift
        } else {
            ShiftState::Exhausted
        }
    }
}

/// Assigns scouters to the demanded teams of each match.
///
/// Total function: an empty roster, zero limits, or demand beyond the
/// eligible pool all degrade to unassigned slots rather than failing.
pub fn assign_scouters(
    schedule: &[Match],
    roster: &[String],
    demand: &DemandMap,
    limits: RotationLimits,
) -> ScoutingSchedule {
    let mut consecutive: HashMap<&str, usize> =
        roster.iter().map(|s| (s.as_str(), 0)).collect();
    let mut total: HashMap<&str, usize> = roster.iter().map(|s| (s.as_str(), 0)).collect();
    let mut result = Vec::with_capacity(schedule.len());

    for m in schedule {
        let required = demand.required_for(m.match_number);

        let mut pool: Vec<&str> = roster
            .iter()
            .map(String::as_str)
            .filter(|s| consecutive.get(s).copied().unwrap_or(0) < limits.soft_limit)
            .collect();
        if pool.len() < required.len() {
            trace!(
                "match {}: soft-limited pool of {} cannot cover demand of {}, widening to hard limit",
                m.match_number,
                pool.len(),
                required.len()
            );
            pool = roster
                .iter()
                .map(String::as_str)
                .filter(|s| consecutive.get(s).copied().unwrap_or(0) < limits.hard_limit)
                .collect();
        }
        pool.sort_by_key(|s| {
            let streak = consecutive.get(s).copied().unwrap_or(0);
            let load = total.get(s).copied().unwrap_or(0);
            (ShiftState::of(streak, limits.soft_limit), streak, load)
        });

        let mut assigned: HashMap<u32, &str> = HashMap::new();
        for (&team, &scouter) in required.iter().zip(pool.iter()) {
            if let Some(streak) = consecutive.get_mut(scouter) {
                *streak += 1;
            }
            if let Some(load) = total.get_mut(scouter) {
                *load += 1;
            }
            assigned.insert(team, scouter);
        }

        // A match without an assignment breaks the scouter's shift,
        // whether or not they were in the pool.
        let working: HashSet<&str> = assigned.values().copied().collect();
        for s in roster {
            if !working.contains(s.as_str()) {
                consecutive.insert(s.as_str(), 0);
            }
        }

        let mut out = ScoutingMatch::from_match(m);
        for team in &mut out.teams {
            team.scouter = assigned.get(&team.team_number).map(|s| s.to_string());
        }
        result.push(out);
    }

    debug!(
        "assigned {} of {} required slots across {} matches",
        result.iter().map(|m| m.assignment_count()).sum::<usize>(),
        demand.total_required(),
        schedule.len()
    );
    result
}

/// The demand-driven scheduling strategy: demand selection composed
/// with rotation-limited assignment.
///
/// # Example
///
/// ```
/// use scout_schedule::demand::CoverageConfig;
/// use scout_schedule::scheduler::{ComplexScheduler, RotationLimits};
///
/// let scheduler = ComplexScheduler::new()
///     .with_coverage(CoverageConfig::new().with_us_teams([254]))
///     .with_limits(RotationLimits::new(4, 8));
/// let roster = vec!["Avery".to_string(), "Kai".to_string()];
/// let scouting = scheduler.schedule(&[], &roster);
/// assert!(scouting.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComplexScheduler {
    coverage: CoverageConfig,
    limits: RotationLimits,
}

impl ComplexScheduler {
    /// Creates a scheduler with default coverage and rotation settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the coverage policy configuration.
    pub fn with_coverage(mut self, coverage: CoverageConfig) -> Self {
        self.coverage = coverage;
        self
    }

    /// Sets the rotation limits.
    pub fn with_limits(mut self, limits: RotationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Selects demand and assigns the roster to it.
    pub fn schedule(&self, schedule: &[Match], roster: &[String]) -> ScoutingSchedule {
        let demand = DemandSelector::new(self.coverage.clone()).select(schedule);
        assign_scouters(schedule, roster, &demand, self.limits)
    }
}
