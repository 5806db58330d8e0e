//! Demand selection: which teams must be observed in which matches.
//!
//! Four coverage policies are applied in a fixed order over a growing
//! [`DemandMap`]. Each policy only adds demand, and each evaluates its
//! own completion threshold against the deduplicated state left by the
//! policies before it:
//!
//! | Policy | Intent |
//! |--------|--------|
//! | Pre-play lookahead | Recent history for every team about to face or ally with a team of interest |
//! | Career bookends | Observe teams early and late in their event run |
//! | Minimum total coverage | Per-team floor on required occurrences |
//! | Minimum observers per match | Per-match floor regardless of team-level demand |
//!
//! # Algorithm
//!
//! Preprocessing builds each team's occurrence sequence — the matches it
//! plays, in schedule order. All window rules index into these per-team
//! sequences, never into the global schedule. Selection is total: any
//! window larger than a team's history applies to whatever exists.
//!
//! # Complexity
//! O(matches × teams) with small constants; event schedules are tens to
//! low hundreds of matches.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{DemandMap, Match};

/// Coverage policy configuration.
///
/// All window and floor values are counts of matches or teams; zero
/// disables the corresponding policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageConfig {
    /// Teams of interest. Matches they play in trigger the pre-play
    /// lookahead policy for every co-present team.
    pub us_teams: Vec<u32>,
    /// How many of a team's occurrences to mark before it shares a
    /// match with a team of interest.
    pub scout_before_play: usize,
    /// Each team's last `end_scout` occurrences are marked.
    pub end_scout: usize,
    /// Occurrences skipped before the early-career window opens.
    pub skip_start_scout: usize,
    /// Occurrences marked after the skip.
    pub start_scout: usize,
    /// Per-team floor on distinct required occurrences.
    pub min_scout: usize,
    /// Per-match floor on required teams.
    pub min_scouters_at_match: usize,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            us_teams: Vec::new(),
            scout_before_play: 2,
            end_scout: 3,
            skip_start_scout: 3,
            start_scout: 3,
            min_scout: 6,
            min_scouters_at_match: 1,
        }
    }
}

impl CoverageConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the teams of interest.
    pub fn with_us_teams(mut self, teams: impl IntoIterator<Item = u32>) -> Self {
        self.us_teams = teams.into_iter().collect();
        self
    }

    /// Sets the pre-play lookback window.
    pub fn with_scout_before_play(mut self, matches: usize) -> Self {
        self.scout_before_play = matches;
        self
    }

    /// Sets the late-career window.
    pub fn with_end_scout(mut self, matches: usize) -> Self {
        self.end_scout = matches;
        self
    }

    /// Sets the early-career skip.
    pub fn with_skip_start_scout(mut self, matches: usize) -> Self {
        self.skip_start_scout = matches;
        self
    }

    /// Sets the early-career window.
    pub fn with_start_scout(mut self, matches: usize) -> Self {
        self.start_scout = matches;
        self
    }

    /// Sets the per-team coverage floor.
    pub fn with_min_scout(mut self, times: usize) -> Self {
        self.min_scout = times;
        self
    }

    /// Sets the per-match observer floor.
    pub fn with_min_scouters_at_match(mut self, scouters: usize) -> Self {
        self.min_scouters_at_match = scouters;
        self
    }
}

/// Per-team occurrence sequences in schedule order.
///
/// Scratch state owned by one selection run. `order` preserves
/// first-appearance order so every pass iterates teams
/// deterministically.
struct OccurrenceIndex {
    order: Vec<u32>,
    by_team: HashMap<u32, Vec<u32>>,
}

impl OccurrenceIndex {
    fn build(schedule: &[Match]) -> Self {
        let mut order = Vec::new();
        let mut by_team: HashMap<u32, Vec<u32>> = HashMap::new();
        for m in schedule {
            for team in m.team_numbers() {
                let occurrences = by_team.entry(team).or_insert_with(|| {
                    order.push(team);
                    Vec::new()
                });
                occurrences.push(m.match_number);
            }
        }
        Self { order, by_team }
    }

    fn occurrences(&self, team_number: u32) -> &[u32] {
        self.by_team
            .get(&team_number)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Selects per-match demand by applying the four coverage policies.
///
/// Total over well-formed input: always returns a (possibly empty)
/// demand set per match, never fails.
///
/// # Example
///
/// ```
/// use scout_schedule::demand::{CoverageConfig, DemandSelector};
///
/// let config = CoverageConfig::new()
///     .with_us_teams([254])
///     .with_scout_before_play(2);
/// let selector = DemandSelector::new(config);
/// let demand = selector.select(&[]);
/// assert_eq!(demand.total_required(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DemandSelector {
    config: CoverageConfig,
}

impl DemandSelector {
    /// Creates a selector with the given configuration.
    pub fn new(config: CoverageConfig) -> Self {
        Self { config }
    }

    /// Produces the demand map for a schedule.
    pub fn select(&self, schedule: &[Match]) -> DemandMap {
        let index = OccurrenceIndex::build(schedule);
        let mut demand = DemandMap::new();

        self.mark_preplay_lookahead(schedule, &index, &mut demand);
        self.mark_career_bookends(&index, &mut demand);
        self.mark_min_coverage(&index, &mut demand);
        self.mark_match_floor(schedule, &mut demand);

        debug!(
            "demand selection: {} required slots across {} matches",
            demand.total_required(),
            schedule.len()
        );
        demand
    }

    /// Pre-play lookahead: for every match containing a team of
    /// interest, the team of interest is required there, and every
    /// co-present team (the team of interest included) has up to
    /// `scout_before_play` of its immediately preceding occurrences
    /// marked.
    fn mark_preplay_lookahead(
        &self,
        schedule: &[Match],
        index: &OccurrenceIndex,
        demand: &mut DemandMap,
    ) {
        for m in schedule {
            if !self.config.us_teams.iter().any(|&t| m.contains_team(t)) {
                continue;
            }
            for team in m.team_numbers() {
                if self.config.us_teams.contains(&team) {
                    demand.insert(team, m.match_number);
                }
                let occurrences = index.occurrences(team);
                let at = occurrences
                    .iter()
                    .position(|&n| n == m.match_number)
                    .unwrap_or(0);
                let from = at.saturating_sub(self.config.scout_before_play);
                for &earlier in &occurrences[from..at] {
                    demand.insert(team, earlier);
                }
            }
        }
    }

    /// Career bookends: each team's last `end_scout` occurrences, and
    /// the `start_scout` occurrences after skipping the first
    /// `skip_start_scout`.
    fn mark_career_bookends(&self, index: &OccurrenceIndex, demand: &mut DemandMap) {
        for &team in &index.order {
            let occurrences = index.occurrences(team);
            let tail_from = occurrences.len().saturating_sub(self.config.end_scout);
            for &n in &occurrences[tail_from..] {
                demand.insert(team, n);
            }
            let head_from = self.config.skip_start_scout.min(occurrences.len());
            let head_to = (self.config.skip_start_scout + self.config.start_scout)
                .min(occurrences.len());
            for &n in &occurrences[head_from..head_to] {
                demand.insert(team, n);
            }
        }
    }

    /// Minimum total coverage: teams below the `min_scout` floor are
    /// topped up from their own occurrence sequence, lightest-loaded
    /// matches first (occurrence order on ties).
    fn mark_min_coverage(&self, index: &OccurrenceIndex, demand: &mut DemandMap) {
        for &team in &index.order {
            if demand.scouted_count(team) >= self.config.min_scout {
                continue;
            }
            let mut candidates = index.occurrences(team).to_vec();
            candidates.sort_by_key(|&n| demand.required_count(n));
            for &n in &candidates {
                if demand.scouted_count(team) >= self.config.min_scout {
                    break;
                }
                demand.insert(team, n);
            }
        }
    }

    /// Minimum observers per match: matches below the
    /// `min_scouters_at_match` floor take further teams from their own
    /// six, least-required teams first (listing order on ties).
    fn mark_match_floor(&self, schedule: &[Match], demand: &mut DemandMap) {
        for m in schedule {
            if demand.required_count(m.match_number) >= self.config.min_scouters_at_match {
                continue;
            }
            let mut candidates: Vec<u32> = m.team_numbers().collect();
            candidates.sort_by_key(|&team| demand.scouted_count(team));
            for &team in &candidates {
                if demand.required_count(m.match_number) >= self.config.min_scouters_at_match {
                    break;
                }
                demand.insert(team, m.match_number);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Station, TeamInMatch};
    use chrono::{TimeZone, Utc};

    fn make_match(match_number: u32, teams: [u32; 6]) -> Match {
        let mut m = Match::new(
            match_number,
            Utc.with_ymd_and_hms(2026, 3, 14, 9, match_number, 0).unwrap(),
        )
        .with_description(format!("Qualification {match_number}"));
        for (i, &team) in teams.iter().enumerate() {
            m = m.with_team(TeamInMatch::new(team, Station::ALL[i]));
        }
        m
    }

    /// Configuration with every policy off.
    fn quiet_config() -> CoverageConfig {
        CoverageConfig::new()
            .with_scout_before_play(0)
            .with_end_scout(0)
            .with_skip_start_scout(0)
            .with_start_scout(0)
            .with_min_scout(0)
            .with_min_scouters_at_match(0)
    }

    #[test]
    fn test_preplay_lookahead() {
        // Team 200 plays match 1 then shares match 2 with team of interest 100.
        let schedule = vec![
            make_match(1, [200, 900, 901, 902, 903, 904]),
            make_match(2, [100, 200, 300, 905, 906, 907]),
            make_match(3, [100, 400, 500, 908, 909, 910]),
        ];
        let config = quiet_config().with_us_teams([100]).with_scout_before_play(1);
        let demand = DemandSelector::new(config).select(&schedule);

        // Match 1 is 200's prior occurrence before facing team 100.
        assert_eq!(demand.required_for(1), &[200]);
        // 100 is required wherever it plays; co-present teams with no
        // history contribute nothing here.
        assert_eq!(demand.required_for(2), &[100]);
        // 100's own lookback before match 3 re-marks match 2 (no-op).
        assert_eq!(demand.required_for(3), &[100]);
        assert_eq!(demand.scouted_count(100), 2);
        assert_eq!(demand.scouted_count(200), 1);
    }

    #[test]
    fn test_preplay_window_exceeds_history() {
        let schedule = vec![
            make_match(1, [200, 900, 901, 902, 903, 904]),
            make_match(2, [100, 200, 300, 905, 906, 907]),
        ];
        // Window far larger than any team's history: marks what exists.
        let config = quiet_config().with_us_teams([100]).with_scout_before_play(50);
        let demand = DemandSelector::new(config).select(&schedule);

        assert_eq!(demand.required_for(1), &[200]);
        assert_eq!(demand.required_for(2), &[100]);
    }

    #[test]
    fn test_career_bookends() {
        // Team 42 plays five matches; every other team is filler.
        let schedule = vec![
            make_match(1, [42, 900, 901, 902, 903, 904]),
            make_match(2, [42, 910, 911, 912, 913, 914]),
            make_match(3, [42, 920, 921, 922, 923, 924]),
            make_match(4, [42, 930, 931, 932, 933, 934]),
            make_match(5, [42, 940, 941, 942, 943, 944]),
        ];
        let config = quiet_config()
            .with_end_scout(2)
            .with_skip_start_scout(1)
            .with_start_scout(2);
        let demand = DemandSelector::new(config).select(&schedule);

        // Tail {4,5}; head after skipping one {2,3}. Match 1 untouched.
        assert!(!demand.required_for(1).contains(&42));
        assert!(demand.required_for(2).contains(&42));
        assert!(demand.required_for(3).contains(&42));
        assert!(demand.required_for(4).contains(&42));
        assert!(demand.required_for(5).contains(&42));
        assert_eq!(demand.scouted_count(42), 4);
    }

    #[test]
    fn test_bookends_shorter_than_windows() {
        let schedule = vec![make_match(1, [42, 900, 901, 902, 903, 904])];
        let config = quiet_config()
            .with_end_scout(3)
            .with_skip_start_scout(0)
            .with_start_scout(3);
        let demand = DemandSelector::new(config).select(&schedule);
        // One occurrence satisfies both windows once, not twice.
        assert_eq!(demand.scouted_count(42), 1);
    }

    #[test]
    fn test_min_coverage_tops_up_to_floor() {
        let schedule = vec![
            make_match(1, [42, 900, 901, 902, 903, 904]),
            make_match(2, [42, 910, 911, 912, 913, 914]),
            make_match(3, [42, 920, 921, 922, 923, 924]),
        ];
        let config = quiet_config().with_min_scout(2);
        let demand = DemandSelector::new(config).select(&schedule);
        assert_eq!(demand.scouted_count(42), 2);
    }

    #[test]
    fn test_min_coverage_exhausts_short_history() {
        let schedule = vec![
            make_match(1, [42, 900, 901, 902, 903, 904]),
            make_match(2, [42, 910, 911, 912, 913, 914]),
        ];
        let config = quiet_config().with_min_scout(5);
        let demand = DemandSelector::new(config).select(&schedule);
        // Floor exceeds the team's history: whatever exists is marked.
        assert_eq!(demand.scouted_count(42), 2);
    }

    #[test]
    fn test_min_coverage_prefers_light_matches() {
        // Team 100's presence loads match 2 with demand before the
        // coverage floor runs for team 42.
        let schedule = vec![
            make_match(1, [42, 900, 901, 902, 903, 904]),
            make_match(2, [42, 100, 911, 912, 913, 914]),
        ];
        let config = quiet_config()
            .with_us_teams([100])
            .with_min_scout(1);
        let demand = DemandSelector::new(config).select(&schedule);

        // Match 2 already requires {100}; match 1 is lighter and wins.
        assert!(demand.required_for(1).contains(&42));
        assert!(!demand.required_for(2).contains(&42));
    }

    #[test]
    fn test_match_floor_on_empty_match() {
        let schedule = vec![make_match(1, [10, 20, 30, 40, 50, 60])];
        let config = quiet_config().with_min_scouters_at_match(3);
        let demand = DemandSelector::new(config).select(&schedule);
        // Full tie on required-occurrence counts: listing order wins.
        assert_eq!(demand.required_for(1), &[10, 20, 30]);
    }

    #[test]
    fn test_match_floor_prefers_least_required_teams() {
        // Team 60 is already required (team of interest), so the floor
        // tops up with the least-required of the rest.
        let schedule = vec![make_match(1, [10, 20, 30, 40, 50, 60])];
        let config = quiet_config()
            .with_us_teams([60])
            .with_min_scouters_at_match(3);
        let demand = DemandSelector::new(config).select(&schedule);
        assert_eq!(demand.required_for(1), &[60, 10, 20]);
    }

    #[test]
    fn test_match_floor_capped_by_team_list() {
        let schedule = vec![make_match(1, [10, 20, 30, 40, 50, 60])];
        let config = quiet_config().with_min_scouters_at_match(9);
        let demand = DemandSelector::new(config).select(&schedule);
        assert_eq!(demand.required_count(1), 6);
    }

    #[test]
    fn test_empty_schedule() {
        let demand = DemandSelector::new(CoverageConfig::default()).select(&[]);
        assert_eq!(demand.total_required(), 0);
    }

    #[test]
    fn test_selection_invariants() {
        let schedule = vec![
            make_match(1, [1, 2, 3, 4, 5, 6]),
            make_match(2, [7, 8, 9, 10, 11, 12]),
            make_match(3, [1, 7, 2, 8, 3, 9]),
            make_match(4, [4, 10, 5, 11, 6, 12]),
            make_match(5, [1, 8, 5, 9, 2, 10]),
            make_match(6, [3, 11, 6, 7, 4, 12]),
        ];
        let config = CoverageConfig::new().with_us_teams([1]);
        let demand = DemandSelector::new(config.clone()).select(&schedule);

        let index = OccurrenceIndex::build(&schedule);
        for m in &schedule {
            let required = demand.required_for(m.match_number);
            // Only teams actually in the match, never more than six.
            assert!(required.len() <= 6);
            for &team in required {
                assert!(m.contains_team(team));
            }
            // Per-match floor.
            assert!(required.len() >= config.min_scouters_at_match.min(6));
        }
        // Per-team floor.
        for (&team, occurrences) in &index.by_team {
            assert!(demand.scouted_count(team) >= config.min_scout.min(occurrences.len()));
        }
    }
}
