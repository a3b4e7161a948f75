//! Tests for the entry parser components

pub mod column_segmenter_tests;
pub mod note_splitter_tests;

/// Wrap plain strings as entry lines
pub fn lines(texts: &[&str]) -> Vec<Option<String>> {
    texts.iter().map(|text| Some(text.to_string())).collect()
}

/// A first line padded to the full-width layout: four segments separated by
/// 3+ space gutters, 73 characters once trimmed.
pub fn full_width_first_line() -> String {
    format!(
        "{:<20}{:<30}{:<15}{}",
        "A1.2.2020", "100 High St", "1.1.2099", "AB123456"
    )
}
