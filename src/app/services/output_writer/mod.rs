//! Output writers for validated records
//!
//! - [`csv_writer`] - Tabular output with the fixed 11-column header
//! - [`json_writer`] - Pretty-printed document output
//!
//! Both writers take the flat post-validation record sequence; the schedule
//! grouping has already been discarded by the batch validator.

pub mod csv_writer;
pub mod json_writer;

#[cfg(test)]
pub mod tests;

pub use csv_writer::write_csv;
pub use json_writer::write_json;

use crate::app::models::StructuredEntry;
use crate::Result;
use std::path::Path;
use tracing::error;

/// Write the validated records to both output formats.
///
/// Each writer's failure is reported but does not block the other;
/// the first error is returned once both have been attempted.
pub fn write_outputs(
    records: &[StructuredEntry],
    csv_path: &Path,
    json_path: &Path,
) -> Result<()> {
    let csv_result = write_csv(records, csv_path);
    if let Err(e) = &csv_result {
        error!("Error saving data to CSV: {e}");
    }

    let json_result = write_json(records, json_path);
    if let Err(e) = &json_result {
        error!("Error saving data to JSON: {e}");
    }

    csv_result.and(json_result)
}
