//! Build statistics and result structures for time-series conversion
//!
//! This module provides types for tracking how many time-series entries
//! became observations and which entries were dropped for unusable
//! timestamps.

use crate::app::models::Observation;

/// Time-series build result with observations and basic statistics
#[derive(Debug, Clone)]
pub struct TimeSeriesBuildResult {
    /// Successfully built observation entities
    pub observations: Vec<Observation>,

    /// Basic build statistics
    pub stats: TimeSeriesStats,
}

/// Simple time-series build statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimeSeriesStats {
    /// Total number of entries encountered
    pub total_entries: usize,

    /// Number of entries that yielded at least one observation
    pub entries_converted: usize,

    /// Number of entries dropped for an unusable timestamp
    pub entries_skipped: usize,

    /// Number of observation entities built
    pub observations_built: usize,

    /// List of skip reasons for debugging
    pub errors: Vec<String>,
}

impl TimeSeriesStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_entries: 0,
            entries_converted: 0,
            entries_skipped: 0,
            observations_built: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_entries == 0 {
            0.0
        } else {
            (self.entries_converted as f64 / self.total_entries as f64) * 100.0
        }
    }

    /// Check if the build was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for TimeSeriesStats {
    fn default() -> Self {
        Self::new()
    }
}
