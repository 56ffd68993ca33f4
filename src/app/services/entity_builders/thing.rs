//! Thing entity construction
//!
//! Every station row yields exactly one Thing carrying the station's name
//! and quality flags.

use crate::app::models::{StationRow, Thing, ThingProperties};
use crate::constants;

/// Builder for SensorThings Thing entities
#[derive(Debug, Default)]
pub struct ThingBuilder;

impl ThingBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self
    }

    /// Build the Thing for a station row
    pub fn build(&self, row: &StationRow) -> Thing {
        Thing {
            iot_id: row.station_id.clone(),
            name: row.name.clone(),
            description: constants::thing::DESCRIPTION.to_string(),
            properties: ThingProperties {
                outdated: row.outdated,
                measurements_plausible: row.measurements_plausible,
            },
        }
    }
}
