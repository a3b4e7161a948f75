//! Per-row validation: the conjunction of all field validators

use crate::app::models::StructuredEntry;
use crate::constants::fields;

use super::diagnostics::DiagnosticSink;
use super::field_validators::{
    validate_date_of_lease_and_term, validate_entry_number, validate_guid,
    validate_lessees_title, validate_note, validate_processed_date_time,
    validate_property_description, validate_registration_date_and_plan_ref, FieldContext,
    FieldValue,
};

/// Validate one structured record against every field rule.
///
/// All validators run unconditionally (no short-circuit) so each failing
/// field in a row gets its own diagnostic; the row passes iff every check
/// passes. The record itself is never mutated.
pub fn validate_row(entry: &StructuredEntry, row_index: usize, sink: &dyn DiagnosticSink) -> bool {
    let ctx = FieldContext {
        row_index,
        guid: entry.guid_or_unknown(),
        sink,
    };

    let verdicts = [
        validate_guid(FieldValue::Text(&entry.guid), &ctx),
        validate_processed_date_time(FieldValue::Text(&entry.processed_date_time), &ctx),
        validate_entry_number(FieldValue::from_entry_number(entry.entry_number.as_ref()), &ctx),
        validate_registration_date_and_plan_ref(
            FieldValue::from_text(entry.registration_date_and_plan_ref.as_deref()),
            &ctx,
        ),
        validate_property_description(
            FieldValue::from_text(entry.property_description.as_deref()),
            &ctx,
        ),
        validate_date_of_lease_and_term(
            FieldValue::from_text(entry.date_of_lease_and_term()),
            &ctx,
        ),
        validate_lessees_title(FieldValue::from_text(entry.lessees_title.as_deref()), &ctx),
        validate_note(FieldValue::from_text(entry.note_one.as_deref()), fields::NOTE_ONE, &ctx),
        validate_note(FieldValue::from_text(entry.note_two.as_deref()), fields::NOTE_TWO, &ctx),
        validate_note(
            FieldValue::from_text(entry.note_three.as_deref()),
            fields::NOTE_THREE,
            &ctx,
        ),
        validate_note(
            FieldValue::from_text(entry.note_four.as_deref()),
            fields::NOTE_FOUR,
            &ctx,
        ),
    ];

    verdicts.iter().all(|&passed| passed)
}
