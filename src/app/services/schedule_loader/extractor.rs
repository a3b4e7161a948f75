//! Raw entry extraction from the nested document structure

use crate::app::models::{RawEntry, ScheduleItem};
use tracing::info;

/// Collect every raw entry across all `leaseschedule.scheduleEntry` arrays.
///
/// Items missing either key contribute nothing; the collected count is
/// logged so feeds that silently carry no entries are visible.
pub fn extract_entries(document: &[ScheduleItem]) -> Vec<&RawEntry> {
    let entries: Vec<&RawEntry> = document
        .iter()
        .filter_map(|item| item.leaseschedule.as_ref())
        .filter_map(|schedule| schedule.schedule_entry.as_ref())
        .flatten()
        .collect();

    info!("Total entries collected: {}", entries.len());
    entries
}
