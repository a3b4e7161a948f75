//! Application constants for the lease parser
//!
//! This module contains the layout thresholds, text patterns, and field name
//! mappings used throughout the lease schedule pipeline.

// =============================================================================
// Register Layout Constants
// =============================================================================

/// Minimum trimmed length for an entry's first line to be treated as the
/// full-width four-column header row. Empirically consistent across the
/// register extracts; not structurally enforced anywhere else.
pub const FIRST_LINE_MIN_CHARS: usize = 73;

/// Maximum number of NOTE annotations retained per entry. Additional notes
/// are silently discarded; that truncation is part of the output contract.
pub const MAX_NOTES: usize = 4;

/// Literal substring marking a line whose successor continues the lease term
/// value rather than starting a fresh column row.
pub const PART_OF_ANCHOR: &str = "(part of)";

// =============================================================================
// Text Patterns
// =============================================================================

/// A NOTE annotation start, e.g. "NOTE 1:", "NOTE:", "note 2" (case-insensitive)
pub const NOTE_MARKER_PATTERN: &str = r"(?i)^NOTE\s*(\d*):?";

/// A line consisting solely of a register date, e.g. "12.6.2021"
pub const BARE_DATE_PATTERN: &str = r"^\d{1,2}\.\d{1,2}\.\d{4}$";

/// A register date appearing anywhere inside a field value
pub const DATE_ANYWHERE_PATTERN: &str = r"\b\d{1,2}\.\d{1,2}\.\d{4}\b";

/// A register date without word-boundary anchors, used for counting
/// non-overlapping date occurrences
pub const DATE_OCCURRENCE_PATTERN: &str = r"\d{1,2}\.\d{1,2}\.\d{4}";

/// Lessee's title reference: 1-3 letters followed by 4-6 digits, full match
pub const LESSEES_TITLE_PATTERN: &str = r"(?i)^[A-Z]{1,3}\d{4,6}$";

/// Column separator on the full-width first line (runs of 3+ whitespace)
pub const FIRST_LINE_SPLIT_PATTERN: &str = r"\s{3,}";

/// Column separator on subsequent lines (runs of 2+ whitespace)
pub const COLUMN_SPLIT_PATTERN: &str = r"\s{2,}";

// =============================================================================
// Field Names and Sentinels
// =============================================================================

/// Schedule type recorded when the input document omits one
pub const UNKNOWN_SCHEDULE_TYPE: &str = "Unknown Schedule Type";

/// Identity sentinel used in diagnostics when a row carries no guid
pub const UNKNOWN_GUID: &str = "Unknown GUID";

/// Timestamp format applied to `processedDateTime`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Output column order shared by the CSV writer and the validation reports
pub const CSV_FIELD_NAMES: &[&str] = &[
    fields::GUID,
    fields::PROCESSED_DATE_TIME,
    fields::ENTRY_NUMBER,
    fields::REGISTRATION_DATE_AND_PLAN_REF,
    fields::PROPERTY_DESCRIPTION,
    fields::DATE_OF_LEASE_AND_TERM_AS_REPORTED,
    fields::LESSEES_TITLE,
    fields::NOTE_ONE,
    fields::NOTE_TWO,
    fields::NOTE_THREE,
    fields::NOTE_FOUR,
];

/// Canonical field names as they appear in the serialized records
pub mod fields {
    pub const GUID: &str = "guid";
    pub const PROCESSED_DATE_TIME: &str = "processedDateTime";
    pub const ENTRY_NUMBER: &str = "entryNumber";
    pub const REGISTRATION_DATE_AND_PLAN_REF: &str = "registrationDateAndPlanRef";
    pub const PROPERTY_DESCRIPTION: &str = "propertyDescription";
    pub const DATE_OF_LEASE_AND_TERM: &str = "dateOfLeaseAndTerm";
    pub const DATE_OF_LEASE_AND_TERM_AS_REPORTED: &str = "dateOfLeaseAndTermAsReported";
    pub const LESSEES_TITLE: &str = "lesseesTitle";
    pub const NOTE_ONE: &str = "noteOne";
    pub const NOTE_TWO: &str = "noteTwo";
    pub const NOTE_THREE: &str = "noteThree";
    pub const NOTE_FOUR: &str = "noteFour";
}
