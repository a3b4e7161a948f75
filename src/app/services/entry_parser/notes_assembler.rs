//! Assignment of merged note strings onto the four fixed note slots

use crate::app::models::Notes;
use crate::constants::MAX_NOTES;
use tracing::debug;

/// Assign the ordered note strings to `noteOne`..`noteFour`.
///
/// Notes beyond the fourth are discarded; the register extracts never carry
/// more, and the truncation is part of the documented output contract.
/// Fewer than four notes leaves the remaining slots absent.
pub fn assemble_notes(note_lines: &[String]) -> Notes {
    if note_lines.len() > MAX_NOTES {
        debug!(
            "Entry carries {} notes; keeping the first {}",
            note_lines.len(),
            MAX_NOTES
        );
    }

    let mut slots = note_lines.iter().map(|note| note.trim().to_string());

    Notes {
        note_one: slots.next(),
        note_two: slots.next(),
        note_three: slots.next(),
        note_four: slots.next(),
    }
}
