//! Entry parser for lease schedule register text
//!
//! This module turns the ordered raw lines of one register entry into four
//! named columns plus up to four free-text notes, using positional whitespace
//! heuristics and stateful continuation rules.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`note_splitter`] - Partitions entry lines into main text and NOTE lines
//! - [`column_segmenter`] - Converts main text lines into the four columns
//! - [`notes_assembler`] - Maps ordered note strings onto the fixed slots
//! - [`parser`] - Composition of the three stages into one pure transform
//!
//! ## Usage
//!
//! ```rust
//! use lease_parser::app::services::entry_parser::parse_entry_text;
//!
//! let lines = vec![
//!     Some("28.01.2009      Transformer Chamber (Ground   23.01.2009      EGL557357".to_string()),
//!     Some("NOTE 1: Easement agreed".to_string()),
//! ];
//! let parsed = parse_entry_text(Some(&lines));
//! assert!(parsed.notes.note_one.is_some());
//! ```

pub mod column_segmenter;
pub mod note_splitter;
pub mod notes_assembler;
pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use column_segmenter::segment_main_text;
pub use note_splitter::split_main_text_and_notes;
pub use notes_assembler::assemble_notes;
pub use parser::parse_entry_text;
