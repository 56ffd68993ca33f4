//! HTTP access to the Smart Urban Heat Map API
//!
//! This module provides the production implementation of the upstream
//! source contract, covering the `latest` snapshot endpoint and the
//! per-station `timeseries` endpoint.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sensorthings_converter::app::services::heat_map_client::HeatMapClient;
//! use sensorthings_converter::config::SourceConfig;
//!
//! # fn example() -> sensorthings_converter::Result<()> {
//! let client = HeatMapClient::new(&SourceConfig::default())?;
//! # Ok(())
//! # }
//! ```

pub mod client;

// Re-export main types for easy access
pub use client::HeatMapClient;
