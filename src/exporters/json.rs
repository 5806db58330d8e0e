//! JSON roster exporter.

use super::ExportError;
use crate::models::ScoutingSchedule;

/// Renders a roster as a pretty-printed JSON document.
///
/// The document round-trips through the same wire shape the importer
/// reads: camelCase fields, RFC 3339 start times, unassigned slots
/// omitting the scouter key.
pub fn export_json(schedule: &ScoutingSchedule) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(schedule)?)
}
