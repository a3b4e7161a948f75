//! JSON output for validated records

use crate::app::models::StructuredEntry;
use crate::{Error, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// Write the records as a pretty-printed JSON array. Absent fields are
/// serialized as explicit nulls so the output shape is stable.
pub fn write_json(records: &[StructuredEntry], path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;

    serde_json::to_writer_pretty(BufWriter::new(file), records).map_err(|e| {
        Error::json(
            path.display().to_string(),
            "Failed to serialize records",
            Some(e),
        )
    })?;

    info!("Data successfully saved to {}", path.display());
    Ok(())
}
