//! Tests for main text / note partitioning

use super::lines;
use crate::app::services::entry_parser::note_splitter::{is_note_start, split_main_text_and_notes};

#[test]
fn test_note_marker_detection() {
    assert!(is_note_start("NOTE 1: something"));
    assert!(is_note_start("NOTE: something"));
    assert!(is_note_start("NOTE 12"));
    assert!(is_note_start("note 2: lower case marker"));

    assert!(!is_note_start("12.6.2021"));
    assert!(!is_note_start("SEE NOTE 1"));
    assert!(!is_note_start(""));
}

#[test]
fn test_notes_separated_from_main_text() {
    let input = lines(&[
        "28.01.2009      Transformer Chamber",
        "NOTE 1: The lease is registered",
        "NOTE 2: Easement reserved",
    ]);

    let (main_text, notes) = split_main_text_and_notes(&input);

    assert_eq!(main_text, vec!["28.01.2009      Transformer Chamber"]);
    assert_eq!(
        notes,
        vec!["NOTE 1: The lease is registered", "NOTE 2: Easement reserved"]
    );
}

#[test]
fn test_note_spans_multiple_lines() {
    // A line between two markers belongs to the first note
    let input = lines(&["NOTE 1: foo", "bar", "NOTE 2: baz"]);

    let (main_text, notes) = split_main_text_and_notes(&input);

    assert!(main_text.is_empty());
    assert_eq!(notes, vec!["NOTE 1: foo bar", "NOTE 2: baz"]);
}

#[test]
fn test_entry_without_notes() {
    let input = lines(&["first line", "second line"]);

    let (main_text, notes) = split_main_text_and_notes(&input);

    assert_eq!(main_text, vec!["first line", "second line"]);
    assert!(notes.is_empty());
}

#[test]
fn test_null_lines_become_empty_main_text() {
    let input = vec![None, Some("  padded  ".to_string()), None];

    let (main_text, notes) = split_main_text_and_notes(&input);

    assert_eq!(main_text, vec!["", "padded", ""]);
    assert!(notes.is_empty());
}

#[test]
fn test_null_line_inside_note_continuation() {
    let input = vec![
        Some("NOTE 1: starts here".to_string()),
        None,
        Some("and continues".to_string()),
    ];

    let (main_text, notes) = split_main_text_and_notes(&input);

    assert!(main_text.is_empty());
    // The null line contributes an empty continuation, leaving a double space
    assert_eq!(notes, vec!["NOTE 1: starts here  and continues"]);
}

#[test]
fn test_empty_input() {
    let (main_text, notes) = split_main_text_and_notes(&[]);
    assert!(main_text.is_empty());
    assert!(notes.is_empty());
}
