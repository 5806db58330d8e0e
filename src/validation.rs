//! Schedule shape validation.
//!
//! The scheduling core assumes a well-formed schedule: unique match
//! numbers, six teams per match with unique stations and team numbers,
//! ascending start times. Enforcing that contract belongs to whoever
//! imports the data — these checks back the bundled importer and are
//! available to any other one. Detects:
//! - Duplicate match numbers
//! - Matches without exactly six teams
//! - Duplicate stations or team numbers within a match
//! - Out-of-order start times

use std::collections::HashSet;

use crate::models::Match;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two matches share the same match number.
    DuplicateMatchNumber,
    /// A match does not carry exactly six teams.
    WrongTeamCount,
    /// Two teams in one match share a station.
    DuplicateStation,
    /// One team number appears twice in one match.
    DuplicateTeam,
    /// A match starts before its predecessor.
    UnsortedSchedule,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the structural integrity of a schedule.
///
/// Checks:
/// 1. Match numbers are unique.
/// 2. Every match carries exactly six teams.
/// 3. Stations are unique within each match.
/// 4. Team numbers are unique within each match.
/// 5. Start times are ascending.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_schedule(schedule: &[Match]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut match_numbers = HashSet::new();

    for (i, m) in schedule.iter().enumerate() {
        if !match_numbers.insert(m.match_number) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateMatchNumber,
                format!("Duplicate match number: {}", m.match_number),
            ));
        }

        if m.teams.len() != 6 {
            errors.push(ValidationError::new(
                ValidationErrorKind::WrongTeamCount,
                format!(
                    "Match {} has {} teams, expected 6",
                    m.match_number,
                    m.teams.len()
                ),
            ));
        }

        let mut stations = HashSet::new();
        let mut team_numbers = HashSet::new();
        for team in &m.teams {
            if !stations.insert(team.station) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateStation,
                    format!(
                        "Match {} fields station {} twice",
                        m.match_number,
                        team.station.label()
                    ),
                ));
            }
            if !team_numbers.insert(team.team_number) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateTeam,
                    format!(
                        "Match {} fields team {} twice",
                        m.match_number, team.team_number
                    ),
                ));
            }
        }

        if i > 0 && m.start_time < schedule[i - 1].start_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnsortedSchedule,
                format!(
                    "Match {} starts before its predecessor",
                    m.match_number
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Station, TeamInMatch};
    use chrono::{TimeZone, Utc};

    fn make_match(match_number: u32, minute: u32, teams: [u32; 6]) -> Match {
        let mut m = Match::new(
            match_number,
            Utc.with_ymd_and_hms(2026, 3, 14, 9, minute, 0).unwrap(),
        );
        for (i, &team) in teams.iter().enumerate() {
            m = m.with_team(TeamInMatch::new(team, Station::ALL[i]));
        }
        m
    }

    #[test]
    fn test_valid_schedule() {
        let schedule = vec![
            make_match(1, 0, [10, 20, 30, 40, 50, 60]),
            make_match(2, 8, [11, 21, 31, 41, 51, 61]),
        ];
        assert!(validate_schedule(&schedule).is_ok());
    }

    #[test]
    fn test_empty_schedule_is_valid() {
        assert!(validate_schedule(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_match_number() {
        let schedule = vec![
            make_match(1, 0, [10, 20, 30, 40, 50, 60]),
            make_match(1, 8, [11, 21, 31, 41, 51, 61]),
        ];
        let errors = validate_schedule(&schedule).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateMatchNumber));
    }

    #[test]
    fn test_wrong_team_count() {
        let mut m = make_match(1, 0, [10, 20, 30, 40, 50, 60]);
        m.teams.pop();
        let errors = validate_schedule(&[m]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::WrongTeamCount));
    }

    #[test]
    fn test_duplicate_station() {
        let mut m = make_match(1, 0, [10, 20, 30, 40, 50, 60]);
        m.teams[5].station = Station::Red1;
        let errors = validate_schedule(&[m]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateStation));
    }

    #[test]
    fn test_duplicate_team() {
        let m = make_match(1, 0, [10, 20, 30, 40, 50, 10]);
        let errors = validate_schedule(&[m]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateTeam));
    }

    #[test]
    fn test_unsorted_schedule() {
        let schedule = vec![
            make_match(1, 30, [10, 20, 30, 40, 50, 60]),
            make_match(2, 0, [11, 21, 31, 41, 51, 61]),
        ];
        let errors = validate_schedule(&schedule).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnsortedSchedule));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let mut late = make_match(1, 30, [10, 20, 30, 40, 50, 10]);
        late.teams[3].station = Station::Red1;
        let schedule = vec![late, make_match(1, 0, [11, 21, 31, 41, 51, 61])];
        let errors = validate_schedule(&schedule).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
