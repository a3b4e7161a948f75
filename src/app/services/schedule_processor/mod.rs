//! Schedule processing pipeline
//!
//! Walks the nested input document, parses every entry's text through the
//! entry parser, and decorates each structured record with a unique
//! identifier and processing timestamp while retaining the original
//! `leaseschedule` hierarchy.
//!
//! # Architecture
//!
//! - [`processor`] - Document walk and per-entry orchestration
//! - [`stamper`] - Injected identifier/timestamp generation
//! - [`stats`] - Processing statistics
//!
//! Each entry is processed independently; there is no shared mutable state
//! across entries, so the walk is trivially parallelizable if it ever needs
//! to be.

pub mod processor;
pub mod stamper;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use processor::ScheduleProcessor;
pub use stamper::{EntryStamper, SystemStamper};
pub use stats::ProcessingStats;
