//! Tests for the schedule processor

pub mod processor_tests;

use crate::app::models::{EntryNumber, LeaseSchedule, RawEntry, ScheduleItem};
use crate::app::services::schedule_processor::stamper::EntryStamper;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Stamper returning predictable identifiers for assertions
pub struct FixedStamper {
    counter: AtomicUsize,
}

impl FixedStamper {
    pub fn new() -> Self {
        Self {
            counter: AtomicUsize::new(0),
        }
    }
}

impl EntryStamper for FixedStamper {
    fn guid(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("guid-{n}")
    }

    fn timestamp(&self) -> String {
        "2024-05-01 12:00:00".to_string()
    }
}

/// A raw entry with the given number and plain text lines
pub fn raw_entry(number: i64, texts: &[&str]) -> RawEntry {
    RawEntry {
        entry_number: Some(EntryNumber::Number(number)),
        entry_text: Some(texts.iter().map(|text| Some(text.to_string())).collect()),
    }
}

/// A schedule item wrapping the given entries
pub fn schedule_item(schedule_type: Option<&str>, entries: Vec<RawEntry>) -> ScheduleItem {
    ScheduleItem {
        leaseschedule: Some(LeaseSchedule {
            schedule_type: schedule_type.map(|t| t.to_string()),
            schedule_entry: Some(entries),
        }),
    }
}
