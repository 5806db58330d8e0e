//! CSV roster exporter.
//!
//! One row per match: the match description and start time, then the
//! six team numbers and the six scouter names, both groups in station
//! order (red before blue, position ascending). Unassigned slots
//! render as empty cells.

use csv::WriterBuilder;

use super::ExportError;
use crate::models::{ScoutingSchedule, ScoutingTeam, Station};

/// Renders a roster as a CSV document.
pub fn export_csv(schedule: &ScoutingSchedule) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    let mut header = vec!["description".to_string(), "start time".to_string()];
    for station in Station::ALL {
        header.push(format!("{} team", station.label()));
    }
    for station in Station::ALL {
        header.push(format!("{} scouter", station.label()));
    }
    writer.write_record(&header)?;

    for m in schedule {
        let mut teams: Vec<&ScoutingTeam> = m.teams.iter().collect();
        teams.sort_by_key(|t| t.station);

        let mut record = vec![
            m.description.clone(),
            m.start_time.format("%Y-%m-%d %H:%M").to_string(),
        ];
        for team in &teams {
            record.push(team.team_number.to_string());
        }
        for team in &teams {
            record.push(team.scouter.clone().unwrap_or_default());
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
