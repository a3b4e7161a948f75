//! Tests for the per-field shape validators

use super::check_with_sink;
use crate::app::services::validation::field_validators::{
    validate_date_of_lease_and_term, validate_entry_number, validate_guid,
    validate_lessees_title, validate_note, validate_processed_date_time,
    validate_property_description, validate_registration_date_and_plan_ref, FieldValue,
};

#[test]
fn test_guid_and_timestamp_require_text() {
    let (ok, issues) = check_with_sink(|ctx| validate_guid(FieldValue::Text("abc"), ctx));
    assert!(ok);
    assert!(issues.is_empty());

    let (ok, issues) = check_with_sink(|ctx| validate_guid(FieldValue::Absent, ctx));
    assert!(!ok);
    assert_eq!(issues[0].field, "guid");
    assert_eq!(issues[0].issue, "absent");

    let (ok, _) =
        check_with_sink(|ctx| validate_processed_date_time(FieldValue::Text("2024-05-01"), ctx));
    assert!(ok);
}

#[test]
fn test_entry_number_accepts_integer_or_digit_string() {
    let (ok, _) = check_with_sink(|ctx| validate_entry_number(FieldValue::Integer(12), ctx));
    assert!(ok);

    let (ok, _) = check_with_sink(|ctx| validate_entry_number(FieldValue::Text("0042"), ctx));
    assert!(ok);

    let (ok, issues) = check_with_sink(|ctx| validate_entry_number(FieldValue::Text("12a"), ctx));
    assert!(!ok);
    assert_eq!(issues[0].field, "entryNumber");
    assert_eq!(issues[0].value, "12a");

    let (ok, _) = check_with_sink(|ctx| validate_entry_number(FieldValue::Text(""), ctx));
    assert!(!ok);

    let (ok, issues) = check_with_sink(|ctx| validate_entry_number(FieldValue::Absent, ctx));
    assert!(!ok);
    assert_eq!(issues[0].issue, "absent");
}

#[test]
fn test_registration_ref_needs_a_date_substring() {
    let (ok, _) = check_with_sink(|ctx| {
        validate_registration_date_and_plan_ref(
            FieldValue::Text("Plot near river, 3.4.2020"),
            ctx,
        )
    });
    assert!(ok);

    let (ok, issues) = check_with_sink(|ctx| {
        validate_registration_date_and_plan_ref(FieldValue::Text("no date here"), ctx)
    });
    assert!(!ok);
    assert_eq!(issues[0].issue, "Does not contain a valid date");

    // Absent is explicitly allowed
    let (ok, _) =
        check_with_sink(|ctx| validate_registration_date_and_plan_ref(FieldValue::Absent, ctx));
    assert!(ok);
}

#[test]
fn test_property_description_has_no_shape_constraint() {
    let (ok, _) =
        check_with_sink(|ctx| validate_property_description(FieldValue::Text("anything"), ctx));
    assert!(ok);

    let (ok, _) = check_with_sink(|ctx| validate_property_description(FieldValue::Absent, ctx));
    assert!(ok);

    let (ok, issues) =
        check_with_sink(|ctx| validate_property_description(FieldValue::Integer(5), ctx));
    assert!(!ok);
    assert_eq!(issues[0].issue, "integer");
}

#[test]
fn test_lease_term_requires_two_or_more_dates() {
    let (ok, _) = check_with_sink(|ctx| {
        validate_date_of_lease_and_term(FieldValue::Text("23.01.2009 from 25.12.2008"), ctx)
    });
    assert!(ok);

    let (ok, issues) = check_with_sink(|ctx| {
        validate_date_of_lease_and_term(FieldValue::Text("only 23.01.2009 here"), ctx)
    });
    assert!(!ok);
    assert_eq!(issues[0].issue, "Does not contain two or more dates");

    let (ok, _) = check_with_sink(|ctx| validate_date_of_lease_and_term(FieldValue::Absent, ctx));
    assert!(ok);
}

#[test]
fn test_lessees_title_pattern() {
    // Case-insensitive 1-3 letters plus 4-6 digits
    let (ok, _) = check_with_sink(|ctx| validate_lessees_title(FieldValue::Text("ab1234"), ctx));
    assert!(ok);

    let (ok, _) = check_with_sink(|ctx| validate_lessees_title(FieldValue::Text("EGL557357"), ctx));
    assert!(ok);

    // Four letters is out of shape
    let (ok, issues) =
        check_with_sink(|ctx| validate_lessees_title(FieldValue::Text("ABCD1234"), ctx));
    assert!(!ok);
    assert_eq!(issues[0].issue, "Pattern Mismatch");

    // Seven digits is out of shape
    let (ok, _) = check_with_sink(|ctx| validate_lessees_title(FieldValue::Text("AB1234567"), ctx));
    assert!(!ok);

    let (ok, _) = check_with_sink(|ctx| validate_lessees_title(FieldValue::Absent, ctx));
    assert!(ok);
}

#[test]
fn test_notes_accept_text_or_absent() {
    let (ok, _) = check_with_sink(|ctx| validate_note(FieldValue::Text("NOTE 1"), "noteOne", ctx));
    assert!(ok);

    let (ok, _) = check_with_sink(|ctx| validate_note(FieldValue::Absent, "noteTwo", ctx));
    assert!(ok);

    let (ok, issues) =
        check_with_sink(|ctx| validate_note(FieldValue::Integer(9), "noteThree", ctx));
    assert!(!ok);
    assert_eq!(issues[0].field, "noteThree");
}

#[test]
fn test_issue_carries_row_and_identity_context() {
    let (_, issues) = check_with_sink(|ctx| validate_guid(FieldValue::Absent, ctx));

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].row_index, 0);
    assert_eq!(issues[0].guid, "test-guid");
    let line = issues[0].to_string();
    assert!(line.contains("Column: guid"));
    assert!(line.contains("GUID: test-guid"));
}

#[test]
fn test_unexpected_json_shapes_are_rejected_with_type_name() {
    let value = serde_json::json!(2.5);
    let (ok, issues) =
        check_with_sink(|ctx| validate_entry_number(FieldValue::Other(&value), ctx));
    assert!(!ok);
    assert_eq!(issues[0].issue, "number");
}
