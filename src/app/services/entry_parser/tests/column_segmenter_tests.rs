//! Tests for the column segmentation state machine

use super::full_width_first_line;
use crate::app::services::entry_parser::column_segmenter::segment_main_text;

fn main_text(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

#[test]
fn test_full_width_first_line_splits_into_four_columns() {
    let first = full_width_first_line();
    assert!(first.trim().chars().count() >= 73);

    let columns = segment_main_text(&main_text(&[&first]));

    assert_eq!(columns.registration_date_and_plan_ref, vec!["A1.2.2020"]);
    assert_eq!(columns.property_description, vec!["100 High St"]);
    assert_eq!(columns.date_of_lease_and_term_as_reported, vec!["1.1.2099"]);
    assert_eq!(columns.lessees_title, vec!["AB123456"]);
}

#[test]
fn test_full_width_first_line_with_missing_trailing_segments() {
    // Two segments only: later columns stay unpopulated for this line
    let first = format!("{:<56}{}", "4.5.2015 Edged blue", "Flat 1, The Court");
    assert_eq!(first.trim().chars().count(), 73);

    let columns = segment_main_text(&main_text(&[&first]));

    assert_eq!(
        columns.registration_date_and_plan_ref,
        vec!["4.5.2015 Edged blue"]
    );
    assert_eq!(columns.property_description, vec!["Flat 1, The Court"]);
    assert!(columns.date_of_lease_and_term_as_reported.is_empty());
    assert!(columns.lessees_title.is_empty());
}

#[test]
fn test_short_first_line_uses_default_rule() {
    let columns = segment_main_text(&main_text(&["tinted brown"]));

    assert_eq!(columns.registration_date_and_plan_ref, vec!["tinted brown"]);
    assert_eq!(columns.property_description, vec![""]);
    assert_eq!(columns.date_of_lease_and_term_as_reported, vec![""]);
    assert_eq!(columns.lessees_title, vec![""]);
}

#[test]
fn test_bare_date_goes_to_lease_term_column() {
    let columns = segment_main_text(&main_text(&["some text", "12.6.2021"]));

    assert_eq!(
        columns.date_of_lease_and_term_as_reported,
        vec!["", "12.6.2021"]
    );
}

#[test]
fn test_bare_date_captured_immediately_after_part_of_anchor() {
    // Dates take priority over the anchor transition
    let columns = segment_main_text(&main_text(&["Unit 3 (part of)", "12.6.2021"]));

    assert_eq!(
        columns.date_of_lease_and_term_as_reported,
        vec!["", "12.6.2021"]
    );
    assert_eq!(
        columns.registration_date_and_plan_ref,
        vec!["Unit 3 (part of)"]
    );
}

#[test]
fn test_continuation_token_after_part_of_anchor() {
    let columns = segment_main_text(&main_text(&[
        "Unit 3 (part of)",
        "anchor follower with   gaps",
    ]));
    // The line after the anchor only arms the flag and emits nothing
    assert_eq!(
        columns.registration_date_and_plan_ref,
        vec!["Unit 3 (part of)"]
    );
    assert_eq!(columns.date_of_lease_and_term_as_reported, vec![""]);

    // A single token while the flag is armed continues the lease term
    let columns = segment_main_text(&main_text(&["Unit 3 (part of)", "anchor-follower", "99yrs"]));
    assert_eq!(
        columns.date_of_lease_and_term_as_reported,
        vec!["", "99yrs"]
    );
}

#[test]
fn test_continuation_flag_survives_multiple_tokens() {
    let columns = segment_main_text(&main_text(&[
        "Unit 3 (part of)",
        "follower",
        "25.12.2020",
        "125years",
    ]));

    // follower arms the flag, the date fires the date rule, the token still
    // continues because nothing cleared the flag in between
    assert_eq!(
        columns.date_of_lease_and_term_as_reported,
        vec!["", "25.12.2020", "125years"]
    );
}

#[test]
fn test_default_rule_clears_continuation_flag() {
    let columns = segment_main_text(&main_text(&[
        "Unit 3 (part of)",
        "follower",
        "two  segments",
        "token",
    ]));

    // "two  segments" hits the default rule and clears the flag, so the
    // final single token maps positionally instead of continuing
    assert_eq!(
        columns.registration_date_and_plan_ref,
        vec!["Unit 3 (part of)", "two", "token"]
    );
    assert_eq!(
        columns.date_of_lease_and_term_as_reported,
        vec!["", "segments", ""]
    );
}

#[test]
fn test_default_rule_segment_mappings() {
    // Two segments populate columns one and three
    let columns = segment_main_text(&main_text(&["plan ref", "left part  right part"]));
    assert_eq!(
        columns.registration_date_and_plan_ref,
        vec!["plan ref", "left part"]
    );
    assert_eq!(
        columns.date_of_lease_and_term_as_reported,
        vec!["", "right part"]
    );

    // Three segments populate columns one to three
    let columns = segment_main_text(&main_text(&["x", "a  b  c"]));
    assert_eq!(columns.registration_date_and_plan_ref, vec!["x", "a"]);
    assert_eq!(columns.property_description, vec!["", "b"]);
    assert_eq!(columns.date_of_lease_and_term_as_reported, vec!["", "c"]);
    assert_eq!(columns.lessees_title, vec!["", ""]);

    // Five segments: the extras beyond four are dropped
    let columns = segment_main_text(&main_text(&["x", "a  b  c  d  e"]));
    assert_eq!(columns.lessees_title, vec!["", "d"]);
}

#[test]
fn test_empty_main_text_yields_empty_columns() {
    let columns = segment_main_text(&[]);

    assert!(columns.registration_date_and_plan_ref.is_empty());
    assert!(columns.property_description.is_empty());
    assert!(columns.date_of_lease_and_term_as_reported.is_empty());
    assert!(columns.lessees_title.is_empty());
}
