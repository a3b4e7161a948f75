//! Batch validation across all schedules of a processed document

use crate::app::models::{ProcessedItem, StructuredEntry};
use tracing::info;

use super::diagnostics::DiagnosticSink;
use super::row_validator::validate_row;
use super::stats::ValidationStats;

/// Validate every row of every schedule, keeping only passing records.
///
/// The schedule grouping is discarded: the output is a flat sequence of the
/// records that passed every field check, in document order. Row indices in
/// diagnostics are the entry's position within its own schedule. This is a
/// pure filter; records are cloned into the output, never mutated.
pub fn validate_document(
    document: &[ProcessedItem],
    sink: &dyn DiagnosticSink,
) -> (Vec<StructuredEntry>, ValidationStats) {
    info!("Validating data...");

    let mut valid = Vec::new();
    let mut stats = ValidationStats::default();

    for item in document {
        for (entry_index, entry) in item.leaseschedule.schedule_entry.iter().enumerate() {
            stats.total += 1;
            if validate_row(entry, entry_index, sink) {
                valid.push(entry.clone());
            }
        }
    }

    stats.valid = valid.len();
    info!("{}", stats.summary());

    (valid, stats)
}
