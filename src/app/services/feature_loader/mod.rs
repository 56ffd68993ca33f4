//! Snapshot feature loading for Smart Urban Heat Map GeoJSON payloads
//!
//! This module turns the raw feature collection delivered by the latest
//! endpoint into station rows ready for entity building. Features without a
//! station id are skipped; everything else degrades field by field so that a
//! single malformed value never discards a whole station.
//!
//! ## Architecture
//!
//! The loader is organized into logical components:
//! - [`loader`] - GeoJSON decoding and per-feature row extraction
//! - [`stats`] - Loading statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use sensorthings_converter::app::services::feature_loader::FeatureLoader;
//!
//! # fn example(payload: &str) -> sensorthings_converter::Result<()> {
//! let loader = FeatureLoader::new();
//! let result = loader.load(payload)?;
//!
//! println!("Loaded {} station rows from {} features",
//!          result.stats.rows_loaded,
//!          result.stats.total_features);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use loader::FeatureLoader;
pub use stats::{LoadResult, LoadStats};
