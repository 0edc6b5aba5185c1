//! Parsing statistics and result structures for statement processing
//!
//! This module provides types for tracking parsing progress across input
//! files and organizing grouped results for report generation.

use std::collections::BTreeMap;

use crate::app::models::TaxiGroup;

/// Parsing result with grouped records and statistics
///
/// Groups are keyed by normalized taxi identifier (or the `UNKNOWN`
/// sentinel) and iterate in a stable order so generated statement files
/// come out in a deterministic sequence.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Per-taxi grouped records and aggregated totals
    pub groups: BTreeMap<String, TaxiGroup>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl ParseOutcome {
    /// Aggregate taxi-total sum for a given taxi, if that group exists
    pub fn total_for(&self, taxi: &str) -> Option<f64> {
        self.groups.get(taxi).map(|group| group.total)
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of input files read successfully
    pub files_parsed: usize,

    /// Number of input files skipped because they could not be read
    pub files_failed: usize,

    /// Total number of data rows encountered (header rows excluded)
    pub rows_total: usize,

    /// Number of detail rows retained
    pub detail_rows: usize,

    /// Number of shift-total rows retained
    pub shift_total_rows: usize,

    /// Number of taxi-total rows absorbed into aggregates
    pub taxi_total_rows: usize,

    /// Number of rows that resolved to the UNKNOWN sentinel group
    pub unknown_rows: usize,

    /// List of per-file read errors for the final report
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of input files read successfully, as a percentage
    pub fn file_success_rate(&self) -> f64 {
        let attempted = self.files_parsed + self.files_failed;
        if attempted == 0 {
            0.0
        } else {
            (self.files_parsed as f64 / attempted as f64) * 100.0
        }
    }
}
