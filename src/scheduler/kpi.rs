//! Roster quality metrics (KPIs).
//!
//! Computes coverage and workload indicators from a finished scouting
//! schedule and the demand it was assigned against.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Coverage Rate | Assigned required slots / total required slots |
//! | Load | Assignments per scouter, max and mean |
//! | Peak Streak | Longest run of consecutive matches per scouter |
//! | Unobserved Matches | Matches with no scouter at all |

use std::collections::HashMap;

use crate::models::{DemandMap, ScoutingSchedule};

/// Roster performance indicators.
#[derive(Debug, Clone)]
pub struct RosterKpi {
    /// Total required slots across all matches.
    pub total_required: usize,
    /// Required slots that received a scouter.
    pub assigned_required: usize,
    /// Fraction of demand covered (1.0 when there is no demand).
    pub coverage_rate: f64,
    /// Assignments per scouter.
    pub load_by_scouter: HashMap<String, usize>,
    /// Heaviest single scouter load.
    pub max_load: usize,
    /// Mean load across scouters with at least one assignment.
    pub avg_load: f64,
    /// Longest consecutive-match run per scouter.
    pub peak_streak_by_scouter: HashMap<String, usize>,
    /// Matches with no scouter assigned to any team.
    pub unobserved_matches: usize,
}

impl RosterKpi {
    /// Computes KPIs from a roster and the demand it served.
    pub fn calculate(schedule: &ScoutingSchedule, demand: &DemandMap) -> Self {
        let mut assigned_required = 0;
        let mut load_by_scouter: HashMap<String, usize> = HashMap::new();
        let mut peak_streak_by_scouter: HashMap<String, usize> = HashMap::new();
        let mut current_streak: HashMap<String, usize> = HashMap::new();
        let mut unobserved_matches = 0;

        for m in schedule {
            for &team in demand.required_for(m.match_number) {
                if m.scouter_for(team).is_some() {
                    assigned_required += 1;
                }
            }
            if m.assignment_count() == 0 {
                unobserved_matches += 1;
            }

            // Streaks: extend for scouters working this match, break
            // for everyone else.
            let mut working: Vec<&str> = Vec::new();
            for team in &m.teams {
                if let Some(scouter) = team.scouter.as_deref() {
                    *load_by_scouter.entry(scouter.to_string()).or_insert(0) += 1;
                    if !working.contains(&scouter) {
                        working.push(scouter);
                    }
                }
            }
            current_streak.retain(|scouter, _| working.contains(&scouter.as_str()));
            for scouter in working {
                let streak = current_streak.entry(scouter.to_string()).or_insert(0);
                *streak += 1;
                let peak = peak_streak_by_scouter
                    .entry(scouter.to_string())
                    .or_insert(0);
                *peak = (*peak).max(*streak);
            }
        }

        let total_required = demand.total_required();
        let coverage_rate = if total_required == 0 {
            1.0
        } else {
            assigned_required as f64 / total_required as f64
        };
        let max_load = load_by_scouter.values().copied().max().unwrap_or(0);
        let avg_load = if load_by_scouter.is_empty() {
            0.0
        } else {
            let sum: usize = load_by_scouter.values().sum();
            sum as f64 / load_by_scouter.len() as f64
        };

        Self {
            total_required,
            assigned_required,
            coverage_rate,
            load_by_scouter,
            max_load,
            avg_load,
            peak_streak_by_scouter,
            unobserved_matches,
        }
    }

    /// Whether every required slot received a scouter.
    pub fn fully_covered(&self) -> bool {
        self.assigned_required == self.total_required
    }
}
