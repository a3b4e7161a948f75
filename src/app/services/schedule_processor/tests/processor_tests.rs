//! Tests for document processing and record decoration

use super::{raw_entry, schedule_item, FixedStamper};
use crate::app::models::{EntryNumber, RawEntry, ScheduleItem};
use crate::app::services::schedule_processor::ScheduleProcessor;
use std::sync::Arc;

fn test_processor() -> ScheduleProcessor {
    ScheduleProcessor::with_stamper(Arc::new(FixedStamper::new()))
}

#[test]
fn test_entries_are_decorated_with_guid_and_timestamp() {
    let processor = test_processor();
    let document = vec![schedule_item(
        Some("Schedule of Notices of Lease"),
        vec![raw_entry(1, &["line one"]), raw_entry(2, &["line two"])],
    )];

    let (processed, stats) = processor.process_document(&document);

    assert_eq!(processed.len(), 1);
    let entries = &processed[0].leaseschedule.schedule_entry;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].guid, "guid-0");
    assert_eq!(entries[1].guid, "guid-1");
    assert_eq!(entries[0].processed_date_time, "2024-05-01 12:00:00");
    assert_eq!(entries[0].entry_number, Some(EntryNumber::Number(1)));
    assert_eq!(stats.entries_processed, 2);
    assert_eq!(stats.schedules_processed, 1);
}

#[test]
fn test_schedule_type_defaults_when_missing() {
    let processor = test_processor();
    let document = vec![schedule_item(None, vec![raw_entry(1, &["text"])])];

    let (processed, _) = processor.process_document(&document);

    assert_eq!(
        processed[0].leaseschedule.schedule_type,
        "Unknown Schedule Type"
    );
}

#[test]
fn test_items_without_schedule_keys_are_skipped() {
    let processor = test_processor();
    let document = vec![
        ScheduleItem { leaseschedule: None },
        schedule_item(Some("type"), vec![raw_entry(1, &["text"])]),
    ];

    let (processed, stats) = processor.process_document(&document);

    assert_eq!(processed.len(), 1);
    assert_eq!(stats.items_skipped, 1);
    assert_eq!(stats.schedules_processed, 1);
}

#[test]
fn test_entry_without_text_yields_absent_fields() {
    let processor = test_processor();
    let entry = RawEntry {
        entry_number: Some(EntryNumber::Text("4".to_string())),
        entry_text: None,
    };
    let document = vec![schedule_item(Some("type"), vec![entry])];

    let (processed, stats) = processor.process_document(&document);

    let record = &processed[0].leaseschedule.schedule_entry[0];
    assert!(record.registration_date_and_plan_ref.is_none());
    assert!(record.property_description.is_none());
    assert!(record.note_one.is_none());
    // Identity is still stamped
    assert_eq!(record.guid, "guid-0");
    assert_eq!(stats.entries_missing_text, 1);
}

#[test]
fn test_empty_document_produces_empty_output() {
    let processor = test_processor();

    let (processed, stats) = processor.process_document(&[]);

    assert!(processed.is_empty());
    assert_eq!(stats.entries_processed, 0);
}
