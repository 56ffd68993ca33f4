//! Observation entity construction for time-series entries
//!
//! Unlike the snapshot path, time-series timestamps are parsed strictly: an
//! entry whose `dateObserved` matches no supported format is dropped with a
//! warning, and the remaining entries convert untouched.

use tracing::{debug, warn};

use super::stats::{TimeSeriesBuildResult, TimeSeriesStats};
use crate::app::models::{
    DatastreamRef, Observation, ObservedKind, ObservedTime, StationId, TimeSeriesEntry,
};

/// Builder for SensorThings Observation entities from time-series entries
#[derive(Debug, Default)]
pub struct TimeSeriesObservationBuilder;

impl TimeSeriesObservationBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self
    }

    /// Build Observations for a station's time-series entries
    pub fn build(
        &self,
        station_id: &StationId,
        entries: &[TimeSeriesEntry],
    ) -> TimeSeriesBuildResult {
        let mut stats = TimeSeriesStats::new();
        stats.total_entries = entries.len();

        let mut observations = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match ObservedTime::parse_strict(&entry.date_observed) {
                Ok(observed) => {
                    let built = self.build_entry(station_id, entry, &observed);
                    if !built.is_empty() {
                        stats.entries_converted += 1;
                        stats.observations_built += built.len();
                        observations.extend(built);
                    } else {
                        debug!("Entry {} for station {} carries no readings", index, station_id);
                    }
                }
                Err(error) => {
                    warn!(
                        "Skipping entry {} for station {}: {}",
                        index, station_id, error
                    );
                    stats.errors.push(format!("Entry {}: {}", index, error));
                    stats.entries_skipped += 1;
                }
            }
        }

        TimeSeriesBuildResult {
            observations,
            stats,
        }
    }

    /// Build the Observations one entry contributes
    fn build_entry(
        &self,
        station_id: &StationId,
        entry: &TimeSeriesEntry,
        observed: &ObservedTime,
    ) -> Vec<Observation> {
        let timestamp = observed.to_iso8601();

        ObservedKind::ALL
            .iter()
            .filter_map(|kind| {
                kind.entry_reading(entry).map(|value| Observation {
                    datastream: DatastreamRef {
                        iot_id: kind.datastream_id(station_id),
                    },
                    phenomenon_time: timestamp.clone(),
                    result_time: timestamp.clone(),
                    result: value,
                })
            })
            .collect()
    }
}
