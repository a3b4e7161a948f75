//! Partitioning of raw entry lines into main text and NOTE annotations
//!
//! A NOTE annotation starts at a line matching the note marker and absorbs
//! every following line up to the next marker or the end of the entry, so a
//! note can span multiple physical lines.

use crate::constants::NOTE_MARKER_PATTERN;
use regex::Regex;
use std::sync::LazyLock;

static NOTE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NOTE_MARKER_PATTERN).expect("note marker pattern is valid"));

/// Whether a trimmed line opens a NOTE annotation
pub fn is_note_start(line: &str) -> bool {
    NOTE_MARKER.is_match(line)
}

/// Partition one entry's lines into `(main_text, note_lines)`.
///
/// Null lines are treated as empty strings. Lines are trimmed on the way in.
/// Each note string carries its marker line plus any continuation lines
/// joined with single spaces; ordering is preserved on both sides.
pub fn split_main_text_and_notes(lines: &[Option<String>]) -> (Vec<String>, Vec<String>) {
    let mut main_text = Vec::new();
    let mut note_lines = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = trimmed(&lines[i]);
        if is_note_start(line) {
            // Absorb continuation lines until the next marker
            let mut note = line.to_string();
            i += 1;
            while i < lines.len() {
                let next = trimmed(&lines[i]);
                if is_note_start(next) {
                    break;
                }
                note.push(' ');
                note.push_str(next);
                i += 1;
            }
            note_lines.push(note);
        } else {
            main_text.push(line.to_string());
            i += 1;
        }
    }

    (main_text, note_lines)
}

fn trimmed(line: &Option<String>) -> &str {
    line.as_deref().unwrap_or("").trim()
}
