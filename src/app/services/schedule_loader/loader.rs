//! JSON document loading

use crate::app::models::ScheduleItem;
use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Load a schedule document from a JSON file.
///
/// The top level must be a JSON array; anything else is a malformed-input
/// error and the whole call aborts (there is no partial recovery at this
/// stage).
pub fn load_schedule_file(path: &Path) -> Result<Vec<ScheduleItem>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;

    let value: serde_json::Value = serde_json::from_str(&contents).map_err(|e| {
        Error::json(
            path.display().to_string(),
            "Failed to decode JSON document",
            Some(e),
        )
    })?;

    if !value.is_array() {
        return Err(Error::malformed_input(
            "Input data is not a lease schedule array",
        ));
    }

    let document: Vec<ScheduleItem> = serde_json::from_value(value).map_err(|e| {
        Error::json(
            path.display().to_string(),
            "Document items do not have the schedule shape",
            Some(e),
        )
    })?;

    info!("Successfully loaded data from {}", path.display());
    Ok(document)
}
