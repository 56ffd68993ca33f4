//! Location entity construction
//!
//! A Location is only built for rows carrying a usable point geometry. Rows
//! without one are passed over without comment; the station's other entities
//! are unaffected.

use crate::app::models::{GeoJsonPoint, Location, StationRow};
use crate::constants;

/// Builder for SensorThings Location entities
#[derive(Debug, Default)]
pub struct LocationBuilder;

impl LocationBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self
    }

    /// Build the Location for a station row, if the row has a point
    pub fn build(&self, row: &StationRow) -> Option<Location> {
        let geometry = row.geometry.as_ref()?;

        Some(Location {
            iot_id: row.station_id.clone(),
            name: row.name.clone(),
            description: constants::location::DESCRIPTION.to_string(),
            encoding_type: constants::location::ENCODING_TYPE.to_string(),
            location: GeoJsonPoint::from_geometry(geometry),
        })
    }
}
