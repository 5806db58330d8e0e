//! JSON schedule file importer.

use std::fs;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::models::Schedule;
use crate::validation::{validate_schedule, ValidationError};

/// Errors that can occur while importing a schedule file.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file could not be read.
    #[error("failed to read schedule file: {0}")]
    Io(#[from] std::io::Error),

    /// The file was not a valid schedule document.
    #[error("failed to parse schedule document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The parsed schedule violated the shape contract.
    #[error("schedule failed validation with {} problem(s)", .errors.len())]
    Invalid {
        /// Every detected problem.
        errors: Vec<ValidationError>,
    },
}

/// Imports a schedule from a JSON document on disk.
///
/// The document is an array of matches in the upstream wire shape
/// (camelCase fields, RFC 3339 start times). Matches are sorted
/// ascending by start time before validation, so on-disk order does
/// not matter.
pub fn import_file(path: impl AsRef<Path>) -> Result<Schedule, ImportError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let mut schedule: Schedule = serde_json::from_str(&raw)?;
    schedule.sort_by_key(|m| m.start_time);
    validate_schedule(&schedule).map_err(|errors| ImportError::Invalid { errors })?;
    debug!("imported {} matches from {}", schedule.len(), path.display());
    Ok(schedule)
}
