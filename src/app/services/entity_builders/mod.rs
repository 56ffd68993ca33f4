//! SensorThings entity construction from station rows and time-series entries
//!
//! This module houses one builder per entity kind. The snapshot builders
//! consume [`StationRow`](crate::app::models::StationRow) values and derive
//! the full entity set for a station; the time-series builder converts raw
//! samples for a single known station.
//!
//! ## Architecture
//!
//! The builders are organized into logical components:
//! - [`thing`] - Thing construction, one per station row
//! - [`location`] - Location construction for rows with point geometry
//! - [`datastream`] - Datastream construction, two channels per row
//! - [`observation`] - Observation construction from snapshot readings
//! - [`timeseries`] - Observation construction from time-series entries
//! - [`stats`] - Time-series build statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use sensorthings_converter::app::services::entity_builders::{
//!     DatastreamBuilder, ObservationBuilder, ThingBuilder,
//! };
//! use sensorthings_converter::app::models::StationRow;
//!
//! # fn example(row: &StationRow) {
//! let thing = ThingBuilder::new().build(row);
//! let datastreams = DatastreamBuilder::new().build(row);
//! let observations = ObservationBuilder::new().build(row);
//!
//! println!("Station {} contributes {} datastreams and {} observations",
//!          thing.name, datastreams.len(), observations.len());
//! # }
//! ```

pub mod datastream;
pub mod location;
pub mod observation;
pub mod stats;
pub mod thing;
pub mod timeseries;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use datastream::DatastreamBuilder;
pub use location::LocationBuilder;
pub use observation::ObservationBuilder;
pub use stats::{TimeSeriesBuildResult, TimeSeriesStats};
pub use thing::ThingBuilder;
pub use timeseries::TimeSeriesObservationBuilder;
