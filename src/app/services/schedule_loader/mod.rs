//! Loading and extraction of lease schedule documents
//!
//! - [`loader`] - Reads a JSON file into the typed document model
//! - [`extractor`] - Walks the `leaseschedule.scheduleEntry` hierarchy to
//!   collect raw entries

pub mod extractor;
pub mod loader;

#[cfg(test)]
pub mod tests;

pub use extractor::extract_entries;
pub use loader::load_schedule_file;
