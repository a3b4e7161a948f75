//! Identifier and timestamp generation for processed records
//!
//! Generation is behind a trait so tests can pin deterministic values while
//! the production pipeline stamps real UUIDs and wall-clock timestamps.

use crate::constants::TIMESTAMP_FORMAT;
use chrono::Local;
use uuid::Uuid;

/// Supplies the identity fields attached to every processed record
pub trait EntryStamper: Send + Sync {
    /// A unique identifier for one record
    fn guid(&self) -> String;

    /// The processing timestamp for one record
    fn timestamp(&self) -> String;
}

/// Production stamper: random v4 UUIDs and the local wall clock
#[derive(Debug, Default, Clone)]
pub struct SystemStamper;

impl EntryStamper for SystemStamper {
    fn guid(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn timestamp(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}
