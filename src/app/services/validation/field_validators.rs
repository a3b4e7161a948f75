//! Field-level shape validators
//!
//! One predicate per output field, each taking the field value plus row and
//! identity context for diagnostics. Values are matched explicitly through a
//! tagged [`FieldValue`] rather than inspected by runtime type. Every
//! rejection is reported to the context's diagnostic sink; validators have no
//! other side effects.

use crate::constants::{fields, DATE_ANYWHERE_PATTERN, DATE_OCCURRENCE_PATTERN, LESSEES_TITLE_PATTERN};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::diagnostics::{DiagnosticSink, ValidationIssue};

static DATE_ANYWHERE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_ANYWHERE_PATTERN).expect("date pattern is valid"));
static DATE_OCCURRENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_OCCURRENCE_PATTERN).expect("date pattern is valid"));
static LESSEES_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LESSEES_TITLE_PATTERN).expect("title pattern is valid"));

/// A field value as seen by the validators: text, integer, absent, or an
/// unexpected shape carried through from the input document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
    Absent,
    Other(&'a serde_json::Value),
}

impl<'a> FieldValue<'a> {
    /// Build from an optional string field
    pub fn from_text(value: Option<&'a str>) -> Self {
        match value {
            Some(text) => FieldValue::Text(text),
            None => FieldValue::Absent,
        }
    }

    /// Build from an optional entry number
    pub fn from_entry_number(value: Option<&'a crate::app::models::EntryNumber>) -> Self {
        use crate::app::models::EntryNumber;
        match value {
            Some(EntryNumber::Number(n)) => FieldValue::Integer(*n),
            Some(EntryNumber::Text(s)) => FieldValue::Text(s),
            Some(EntryNumber::Other(v)) => FieldValue::Other(v),
            None => FieldValue::Absent,
        }
    }

    /// Type name used as the default issue description in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "string",
            FieldValue::Integer(_) => "integer",
            FieldValue::Absent => "absent",
            FieldValue::Other(value) => match value {
                serde_json::Value::Null => "null",
                serde_json::Value::Bool(_) => "boolean",
                serde_json::Value::Number(_) => "number",
                serde_json::Value::String(_) => "string",
                serde_json::Value::Array(_) => "array",
                serde_json::Value::Object(_) => "object",
            },
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{text}"),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Absent => write!(f, "None"),
            FieldValue::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Row and identity context shared by all field checks of one record
pub struct FieldContext<'a> {
    pub row_index: usize,
    pub guid: &'a str,
    pub sink: &'a dyn DiagnosticSink,
}

impl FieldContext<'_> {
    /// Report one rejection and return the failed verdict
    fn reject(&self, field: &str, value: FieldValue<'_>, issue: Option<&str>) -> bool {
        let issue = issue
            .map(str::to_string)
            .unwrap_or_else(|| value.type_name().to_string());
        self.sink.record(ValidationIssue {
            field: field.to_string(),
            value: value.to_string(),
            row_index: self.row_index,
            guid: self.guid.to_string(),
            issue,
        });
        false
    }
}

/// guid must be a string
pub fn validate_guid(value: FieldValue<'_>, ctx: &FieldContext<'_>) -> bool {
    match value {
        FieldValue::Text(_) => true,
        other => ctx.reject(fields::GUID, other, None),
    }
}

/// processedDateTime must be a string
pub fn validate_processed_date_time(value: FieldValue<'_>, ctx: &FieldContext<'_>) -> bool {
    match value {
        FieldValue::Text(_) => true,
        other => ctx.reject(fields::PROCESSED_DATE_TIME, other, None),
    }
}

/// entryNumber must be an integer, or a string containing only digits
pub fn validate_entry_number(value: FieldValue<'_>, ctx: &FieldContext<'_>) -> bool {
    match value {
        FieldValue::Integer(_) => true,
        FieldValue::Text(text) if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) => {
            true
        }
        other => ctx.reject(fields::ENTRY_NUMBER, other, None),
    }
}

/// registrationDateAndPlanRef must be absent or contain a date substring
pub fn validate_registration_date_and_plan_ref(
    value: FieldValue<'_>,
    ctx: &FieldContext<'_>,
) -> bool {
    match value {
        FieldValue::Absent => true,
        FieldValue::Text(text) if DATE_ANYWHERE.is_match(text) => true,
        other => ctx.reject(
            fields::REGISTRATION_DATE_AND_PLAN_REF,
            other,
            Some("Does not contain a valid date"),
        ),
    }
}

/// propertyDescription must be absent or a string; no shape constraint
pub fn validate_property_description(value: FieldValue<'_>, ctx: &FieldContext<'_>) -> bool {
    match value {
        FieldValue::Absent | FieldValue::Text(_) => true,
        other => ctx.reject(fields::PROPERTY_DESCRIPTION, other, None),
    }
}

/// dateOfLeaseAndTerm must be absent or contain two or more dates
pub fn validate_date_of_lease_and_term(value: FieldValue<'_>, ctx: &FieldContext<'_>) -> bool {
    match value {
        FieldValue::Absent => true,
        FieldValue::Text(text) => {
            if DATE_OCCURRENCE.find_iter(text).count() >= 2 {
                true
            } else {
                ctx.reject(
                    fields::DATE_OF_LEASE_AND_TERM,
                    value,
                    Some("Does not contain two or more dates"),
                )
            }
        }
        other => ctx.reject(fields::DATE_OF_LEASE_AND_TERM, other, None),
    }
}

/// lesseesTitle must be absent or fully match the title-reference pattern
/// (1-3 letters then 4-6 digits, case-insensitive)
pub fn validate_lessees_title(value: FieldValue<'_>, ctx: &FieldContext<'_>) -> bool {
    match value {
        FieldValue::Absent => true,
        FieldValue::Text(text) => {
            if LESSEES_TITLE.is_match(text) {
                true
            } else {
                ctx.reject(fields::LESSEES_TITLE, value, Some("Pattern Mismatch"))
            }
        }
        other => ctx.reject(fields::LESSEES_TITLE, other, None),
    }
}

/// Each note slot must be absent or a string; no shape constraint
pub fn validate_note(value: FieldValue<'_>, slot: &str, ctx: &FieldContext<'_>) -> bool {
    match value {
        FieldValue::Absent | FieldValue::Text(_) => true,
        other => ctx.reject(slot, other, None),
    }
}
