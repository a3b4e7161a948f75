//! Validation engine for structured lease records
//!
//! Enforces per-field structural invariants (date shapes, title-reference
//! patterns, multi-date requirements) and filters a batch down to only the
//! records that satisfy all of them, emitting one attributable diagnostic for
//! every rejection.
//!
//! # Architecture
//!
//! - [`field_validators`] - One predicate per output field over a tagged
//!   [`FieldValue`], each enforcing a distinct shape contract
//! - [`row_validator`] - Conjunction of all field validators for one record
//! - [`batch_validator`] - Filter across all schedules with a summary report
//! - [`diagnostics`] - Injected sink receiving one issue per rejection
//! - [`stats`] - Valid/total counts for the batch
//!
//! Validators never mutate a record and never raise; a failing row is
//! excluded and processing continues.

pub mod batch_validator;
pub mod diagnostics;
pub mod field_validators;
pub mod row_validator;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use batch_validator::validate_document;
pub use diagnostics::{CollectingSink, DiagnosticSink, TracingSink, ValidationIssue};
pub use field_validators::FieldValue;
pub use row_validator::validate_row;
pub use stats::ValidationStats;
