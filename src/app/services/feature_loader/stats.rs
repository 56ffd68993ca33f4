//! Loading statistics and result structures for snapshot processing
//!
//! This module provides types for tracking how many snapshot features became
//! station rows and for carrying the coordinate reference system name that
//! accompanies the feature collection.

use crate::app::models::StationRow;

/// Loading result with station rows and basic statistics
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Successfully extracted station rows
    pub rows: Vec<StationRow>,

    /// Coordinate reference system name, when the payload declares one
    pub crs_name: Option<String>,

    /// Basic loading statistics
    pub stats: LoadStats,
}

/// Simple loading statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Total number of features encountered
    pub total_features: usize,

    /// Number of station rows successfully extracted
    pub rows_loaded: usize,

    /// Number of features skipped for lacking a station id
    pub features_skipped: usize,

    /// List of skip reasons for debugging
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_features: 0,
            rows_loaded: 0,
            features_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_features == 0 {
            0.0
        } else {
            (self.rows_loaded as f64 / self.total_features as f64) * 100.0
        }
    }

    /// Check if loading was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
