//! Roster rendering.
//!
//! Exporters own the output boundary: they turn a finished
//! [`crate::models::ScoutingSchedule`] into a document. Two formats are
//! provided — pretty-printed JSON in the wire shape, and a
//! station-major CSV for printing and spreadsheets.

mod csv;
mod json;

pub use self::csv::export_csv;
pub use json::export_json;

use thiserror::Error;

/// Errors that can occur while rendering a roster document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer rejected a record.
    #[error("failed to render csv document: {0}")]
    Csv(#[from] ::csv::Error),

    /// The underlying buffer could not be flushed.
    #[error("failed to flush csv document: {0}")]
    Io(#[from] std::io::Error),

    /// The rendered CSV was not valid UTF-8.
    #[error("csv document was not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// JSON serialization failed.
    #[error("failed to render json document: {0}")]
    Json(#[from] serde_json::Error),
}
