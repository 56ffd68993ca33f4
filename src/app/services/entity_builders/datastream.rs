//! Datastream entity construction
//!
//! Every station row yields exactly two Datastreams, one per observed
//! channel, regardless of which readings the snapshot carries. Identifiers
//! follow the `{stationId}-temperature` / `{stationId}-humidity` pattern
//! that ties Observations back to their channel.

use crate::app::models::{Datastream, ObservedKind, StationRow, ThingRef};
use crate::constants;

/// Builder for SensorThings Datastream entities
#[derive(Debug, Default)]
pub struct DatastreamBuilder;

impl DatastreamBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self
    }

    /// Build both channel Datastreams for a station row
    pub fn build(&self, row: &StationRow) -> Vec<Datastream> {
        ObservedKind::ALL
            .iter()
            .map(|kind| self.build_channel(row, *kind))
            .collect()
    }

    /// Build the Datastream for one observed channel
    fn build_channel(&self, row: &StationRow, kind: ObservedKind) -> Datastream {
        Datastream {
            iot_id: kind.datastream_id(&row.station_id),
            name: kind.stream_name(&row.name),
            description: kind.stream_description().to_string(),
            unit_of_measurement: kind.unit_of_measurement(),
            observation_type: constants::OBSERVATION_TYPE.to_string(),
            thing: ThingRef {
                iot_id: row.station_id.clone(),
            },
            observed_property: kind.observed_property(),
            sensor: kind.sensor(),
        }
    }
}
