//! Observation entity construction for snapshot rows
//!
//! One Observation is built per reading the row actually carries, so a
//! station reporting only temperature contributes a single entity. The row
//! timestamp is rendered once and stamped into both `phenomenonTime` and
//! `resultTime`.

use crate::app::models::{DatastreamRef, Observation, ObservedKind, StationRow};

/// Builder for SensorThings Observation entities from snapshot rows
#[derive(Debug, Default)]
pub struct ObservationBuilder;

impl ObservationBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self
    }

    /// Build the Observations for a station row's present readings
    pub fn build(&self, row: &StationRow) -> Vec<Observation> {
        let timestamp = row.date_observed.to_iso8601();

        ObservedKind::ALL
            .iter()
            .filter_map(|kind| {
                kind.reading(row).map(|value| Observation {
                    datastream: DatastreamRef {
                        iot_id: kind.datastream_id(&row.station_id),
                    },
                    phenomenon_time: timestamp.clone(),
                    result_time: timestamp.clone(),
                    result: value,
                })
            })
            .collect()
    }
}
