//! Column segmentation for register main text
//!
//! Converts the main text lines of one entry into the four positional
//! columns. The register layout is only loosely fixed-width: the first line
//! usually spans the full page width with wide gutters between columns, while
//! later lines wrap individual column values, interleave bare dates, and
//! continue lease-term tokens after a "(part of)" anchor. Segmentation is a
//! fold over the lines with a small explicit state machine.

use crate::app::models::Columns;
use crate::constants::{
    BARE_DATE_PATTERN, COLUMN_SPLIT_PATTERN, FIRST_LINE_MIN_CHARS, FIRST_LINE_SPLIT_PATTERN,
    PART_OF_ANCHOR,
};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static BARE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BARE_DATE_PATTERN).expect("bare date pattern is valid"));
static FIRST_LINE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FIRST_LINE_SPLIT_PATTERN).expect("first line pattern is valid"));
static COLUMN_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COLUMN_SPLIT_PATTERN).expect("column split pattern is valid"));

/// Segmentation state threaded through the fold over main-text lines
#[derive(Debug, Clone, Default)]
struct SegmenterState {
    /// Set when the previous line ended with a "(part of)" anchor; a
    /// following single-token line then continues the lease term value.
    continuation_active: bool,
    /// The previous main-text line, as stored (already trimmed)
    previous_line: Option<String>,
}

/// Populate the four columns from one entry's main text lines.
///
/// Exactly one rule fires per line, checked in this order:
/// 1. full-width first line, split on 3+ spaces into up to four segments
/// 2. bare date, appended to the lease-term column (dates take priority
///    over every continuation rule)
/// 3. "(part of)" anchor transition, which only arms the continuation flag
/// 4. armed continuation and a single whitespace-free token, appended to
///    the lease-term column
/// 5. default split on 2+ spaces, mapped positionally
pub fn segment_main_text(main_text: &[String]) -> Columns {
    let mut columns = Columns::default();
    let mut state = SegmenterState::default();

    for (index, raw_line) in main_text.iter().enumerate() {
        let line = raw_line.trim();
        state = apply_line(index, line, state, &mut columns);
    }

    columns
}

fn apply_line(
    index: usize,
    line: &str,
    state: SegmenterState,
    columns: &mut Columns,
) -> SegmenterState {
    let mut continuation_active = state.continuation_active;

    if index == 0 && line.chars().count() >= FIRST_LINE_MIN_CHARS {
        trace!(line, "first line rule");
        segment_first_line(line, columns);
    } else if BARE_DATE.is_match(line) {
        trace!(line, "bare date rule");
        columns
            .date_of_lease_and_term_as_reported
            .push(line.to_string());
    } else if previous_contains_anchor(&state) {
        trace!(line, "continuation anchor rule");
        continuation_active = true;
    } else if continuation_active && is_single_token(line) {
        trace!(line, "continuation token rule");
        columns
            .date_of_lease_and_term_as_reported
            .push(line.to_string());
    } else {
        continuation_active = false;
        segment_wrapped_line(line, columns);
    }

    SegmenterState {
        continuation_active,
        previous_line: Some(line.to_string()),
    }
}

fn previous_contains_anchor(state: &SegmenterState) -> bool {
    state
        .previous_line
        .as_deref()
        .is_some_and(|previous| previous.contains(PART_OF_ANCHOR))
}

/// A continuation value is a single run of non-whitespace, e.g. a term
/// duration token wrapped onto its own line.
fn is_single_token(line: &str) -> bool {
    !line.contains(char::is_whitespace)
}

/// Split the full-width first line on wide gutters into up to four segments,
/// appended to the columns in order. Missing trailing segments leave later
/// columns unpopulated for this line.
fn segment_first_line(line: &str, columns: &mut Columns) {
    let mut segments = FIRST_LINE_SPLIT.split(line).map(str::trim);

    if let Some(segment) = segments.next() {
        columns
            .registration_date_and_plan_ref
            .push(segment.to_string());
    }
    if let Some(segment) = segments.next() {
        columns.property_description.push(segment.to_string());
    }
    if let Some(segment) = segments.next() {
        columns
            .date_of_lease_and_term_as_reported
            .push(segment.to_string());
    }
    if let Some(segment) = segments.next() {
        columns.lessees_title.push(segment.to_string());
    }
}

/// Split a wrapped line on narrow gutters and map the segments positionally.
/// Unoccupied columns receive explicit empty strings for this line; segments
/// beyond the fourth are dropped.
fn segment_wrapped_line(line: &str, columns: &mut Columns) {
    let segments: Vec<&str> = COLUMN_SPLIT.split(line).map(str::trim).collect();

    let (registration, property, lease_term, title) = match segments.as_slice() {
        [] => return,
        [first] => (*first, "", "", ""),
        [first, second] => (*first, "", *second, ""),
        [first, second, third] => (*first, *second, *third, ""),
        [first, second, third, fourth, ..] => (*first, *second, *third, *fourth),
    };

    columns
        .registration_date_and_plan_ref
        .push(registration.to_string());
    columns.property_description.push(property.to_string());
    columns
        .date_of_lease_and_term_as_reported
        .push(lease_term.to_string());
    columns.lessees_title.push(title.to_string());
}
