//! Composition of the entry parsing stages
//!
//! Ties the note splitter, column segmenter, and notes assembler together
//! into one pure transform from raw entry lines to columnar fields.

use crate::app::models::ParsedEntryText;
use tracing::debug;

use super::column_segmenter::segment_main_text;
use super::note_splitter::split_main_text_and_notes;
use super::notes_assembler::assemble_notes;

/// Parse one entry's raw lines into columnar fields and notes.
///
/// Deterministic and free of I/O: the same input always yields the same
/// output. An absent `entry_text` produces all-absent fields rather than an
/// error. Final field values are the column accumulators joined with single
/// spaces and trimmed, with empty results becoming absent (the output shape
/// never contains empty strings).
pub fn parse_entry_text(entry_text: Option<&[Option<String>]>) -> ParsedEntryText {
    let Some(lines) = entry_text else {
        debug!("entryText is absent; producing empty fields for this entry");
        return ParsedEntryText::default();
    };

    let (main_text, note_lines) = split_main_text_and_notes(lines);
    let columns = segment_main_text(&main_text);
    let notes = assemble_notes(&note_lines);

    ParsedEntryText {
        registration_date_and_plan_ref: join_column(&columns.registration_date_and_plan_ref),
        property_description: join_column(&columns.property_description),
        date_of_lease_and_term_as_reported: join_column(
            &columns.date_of_lease_and_term_as_reported,
        ),
        lessees_title: join_column(&columns.lessees_title),
        notes,
    }
}

/// Join one column's accumulated segments into its final field value
fn join_column(segments: &[String]) -> Option<String> {
    let joined = segments.join(" ");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
