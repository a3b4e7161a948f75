//! Processing statistics for the schedule pipeline

/// Statistics for one document processing run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingStats {
    /// Number of schedules carrying entries
    pub schedules_processed: usize,
    /// Number of items skipped for missing schedule keys
    pub items_skipped: usize,
    /// Total number of entries parsed
    pub entries_processed: usize,
    /// Entries whose text was absent in the input
    pub entries_missing_text: usize,
}

impl ProcessingStats {
    /// Create new empty processing statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Get summary of the processing run
    pub fn summary(&self) -> String {
        format!(
            "Processing Summary: {} schedules, {} entries ({} without text), {} items skipped",
            self.schedules_processed,
            self.entries_processed,
            self.entries_missing_text,
            self.items_skipped
        )
    }
}
