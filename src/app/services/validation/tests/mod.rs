//! Tests for the validation engine

pub mod field_validator_tests;

use crate::app::models::{EntryNumber, ProcessedItem, ProcessedSchedule, StructuredEntry};
use crate::app::services::validation::diagnostics::{CollectingSink, ValidationIssue};
use crate::app::services::validation::field_validators::FieldContext;

/// A structured record that passes every field rule
pub fn valid_entry(guid: &str) -> StructuredEntry {
    StructuredEntry {
        guid: guid.to_string(),
        processed_date_time: "2024-05-01 12:00:00".to_string(),
        entry_number: Some(EntryNumber::Number(1)),
        registration_date_and_plan_ref: Some("28.01.2009 Edged red".to_string()),
        property_description: Some("Transformer Chamber (Ground Floor)".to_string()),
        date_of_lease_and_term_as_reported: Some("23.01.2009 99 years".to_string()),
        lessees_title: Some("EGL557357".to_string()),
        note_one: Some("NOTE 1: registered".to_string()),
        note_two: None,
        note_three: None,
        note_four: None,
    }
}

/// Wrap entries into a single-schedule processed document
pub fn document_with(entries: Vec<StructuredEntry>) -> Vec<ProcessedItem> {
    vec![ProcessedItem {
        leaseschedule: ProcessedSchedule {
            schedule_type: "Schedule of Notices of Lease".to_string(),
            schedule_entry: entries,
        },
    }]
}

/// Run one field validator closure against a fresh collecting sink,
/// returning the verdict and any recorded issues.
pub fn check_with_sink<F>(check: F) -> (bool, Vec<ValidationIssue>)
where
    F: FnOnce(&FieldContext<'_>) -> bool,
{
    let sink = CollectingSink::new();
    let ctx = FieldContext {
        row_index: 0,
        guid: "test-guid",
        sink: &sink,
    };
    let verdict = check(&ctx);
    (verdict, sink.take())
}
