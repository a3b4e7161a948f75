//! Validation statistics for a batch run

use serde::Serialize;

/// Valid/total counts for one batch of rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ValidationStats {
    /// Rows that passed every field check
    pub valid: usize,
    /// Rows considered across all schedules
    pub total: usize,
}

impl ValidationStats {
    /// Rows excluded by validation
    pub fn rejected(&self) -> usize {
        self.total - self.valid
    }

    /// Pass rate as a percentage
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.valid as f64 / self.total as f64) * 100.0
        }
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!("Total valid entries: {} / {}", self.valid, self.total)
    }
}
