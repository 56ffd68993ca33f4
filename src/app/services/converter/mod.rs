//! Conversion facade for Smart Urban Heat Map data
//!
//! This module ties the pipeline together: a [`SourceClient`] delivers raw
//! payloads, the feature loader and entity builders derive SensorThings
//! entities, and the facade assembles them into collection-keyed results.
//!
//! The snapshot and time-series paths are two operations on one facade with
//! intentionally different failure policies: snapshot conversion fails fast,
//! time-series conversion degrades to an empty result.
//!
//! ## Architecture
//!
//! - [`source`] - Upstream source contract
//! - [`facade`] - Pipeline orchestration for both conversion paths
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sensorthings_converter::app::services::converter::SensorThingsConverter;
//! use sensorthings_converter::app::services::heat_map_client::HeatMapClient;
//! use sensorthings_converter::config::Config;
//!
//! # async fn example() -> sensorthings_converter::Result<()> {
//! let config = Config::default();
//! let client = HeatMapClient::new(&config.source)?;
//! let converter = SensorThingsConverter::new(client);
//!
//! let snapshot = converter.convert().await?;
//! println!("Converted {} entities", snapshot.entity_count());
//!
//! let series = converter.convert_timeseries("11117", None, None).await?;
//! println!("Converted {} observations", series.observations.len());
//! # Ok(())
//! # }
//! ```

pub mod facade;
pub mod source;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use facade::SensorThingsConverter;
pub use source::SourceClient;
