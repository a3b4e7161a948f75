//! Document walk and per-entry processing orchestration

use crate::app::models::{
    ProcessedItem, ProcessedSchedule, RawEntry, ScheduleItem, StructuredEntry,
};
use crate::app::services::entry_parser::parse_entry_text;
use crate::constants::UNKNOWN_SCHEDULE_TYPE;
use std::sync::Arc;
use tracing::{debug, info};

use super::stamper::{EntryStamper, SystemStamper};
use super::stats::ProcessingStats;

/// Processes a schedule document into decorated structured records
pub struct ScheduleProcessor {
    stamper: Arc<dyn EntryStamper>,
}

impl ScheduleProcessor {
    /// Create a processor with the production stamper
    pub fn new() -> Self {
        Self::with_stamper(Arc::new(SystemStamper))
    }

    /// Create a processor with an injected stamper (used by tests to pin
    /// identifiers and timestamps)
    pub fn with_stamper(stamper: Arc<dyn EntryStamper>) -> Self {
        Self { stamper }
    }

    /// Process the whole document, retaining the `leaseschedule` hierarchy.
    ///
    /// Items without a `leaseschedule` or without `scheduleEntry` are
    /// skipped; every surviving schedule reappears in the output with its
    /// entries parsed and decorated.
    pub fn process_document(
        &self,
        document: &[ScheduleItem],
    ) -> (Vec<ProcessedItem>, ProcessingStats) {
        let mut processed = Vec::new();
        let mut stats = ProcessingStats::new();

        for item in document {
            let Some(schedule) = &item.leaseschedule else {
                debug!("Skipping item without a leaseschedule key");
                stats.items_skipped += 1;
                continue;
            };
            let Some(entries) = &schedule.schedule_entry else {
                debug!("Skipping leaseschedule without scheduleEntry");
                stats.items_skipped += 1;
                continue;
            };

            let schedule_type = schedule
                .schedule_type
                .clone()
                .unwrap_or_else(|| UNKNOWN_SCHEDULE_TYPE.to_string());

            let processed_entries = self.process_entries(entries, &mut stats);

            processed.push(ProcessedItem {
                leaseschedule: ProcessedSchedule {
                    schedule_type,
                    schedule_entry: processed_entries,
                },
            });
            stats.schedules_processed += 1;
        }

        info!(
            "Processing completed, retaining original data structure: {}",
            stats.summary()
        );
        (processed, stats)
    }

    /// Parse and decorate the entries of one schedule
    pub fn process_entries(
        &self,
        entries: &[RawEntry],
        stats: &mut ProcessingStats,
    ) -> Vec<StructuredEntry> {
        entries
            .iter()
            .map(|entry| {
                if entry.entry_text.is_none() {
                    stats.entries_missing_text += 1;
                }
                stats.entries_processed += 1;
                self.process_entry(entry)
            })
            .collect()
    }

    /// Parse one raw entry and attach its identity fields
    pub fn process_entry(&self, entry: &RawEntry) -> StructuredEntry {
        let parsed = parse_entry_text(entry.entry_text.as_deref());

        StructuredEntry {
            guid: self.stamper.guid(),
            processed_date_time: self.stamper.timestamp(),
            entry_number: entry.entry_number.clone(),
            registration_date_and_plan_ref: parsed.registration_date_and_plan_ref,
            property_description: parsed.property_description,
            date_of_lease_and_term_as_reported: parsed.date_of_lease_and_term_as_reported,
            lessees_title: parsed.lessees_title,
            note_one: parsed.notes.note_one,
            note_two: parsed.notes.note_two,
            note_three: parsed.notes.note_three,
            note_four: parsed.notes.note_four,
        }
    }
}

impl Default for ScheduleProcessor {
    fn default() -> Self {
        Self::new()
    }
}
