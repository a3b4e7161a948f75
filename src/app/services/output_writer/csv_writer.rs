//! CSV output for validated records

use crate::app::models::StructuredEntry;
use crate::constants::CSV_FIELD_NAMES;
use crate::{Error, Result};
use std::path::Path;
use tracing::info;

/// Write the records as CSV with the fixed 11-column header.
///
/// Absent fields become empty cells; the entry number is rendered in its
/// source form (integer or string).
pub fn write_csv(records: &[StructuredEntry], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| Error::csv_writing(format!("Failed to create {}", path.display()), Some(e)))?;

    writer.write_record(CSV_FIELD_NAMES)?;

    for record in records {
        let entry_number = record
            .entry_number
            .as_ref()
            .map(|n| n.to_string())
            .unwrap_or_default();

        writer.write_record([
            record.guid.as_str(),
            record.processed_date_time.as_str(),
            entry_number.as_str(),
            cell(&record.registration_date_and_plan_ref),
            cell(&record.property_description),
            cell(&record.date_of_lease_and_term_as_reported),
            cell(&record.lessees_title),
            cell(&record.note_one),
            cell(&record.note_two),
            cell(&record.note_three),
            cell(&record.note_four),
        ])?;
    }

    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", path.display()), e))?;

    info!("Data successfully saved to {}", path.display());
    Ok(())
}

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}
