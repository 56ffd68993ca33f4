//! Application constants for the SensorThings converter
//!
//! This module contains the upstream API defaults, the fixed SensorThings
//! vocabulary (entity descriptions, units, observed properties, sensors),
//! timestamp formats, and identifier helpers used throughout the converter.

// =============================================================================
// Upstream API
// =============================================================================

/// Default base URL of the Smart Urban Heat Map API
pub const DEFAULT_BASE_URL: &str = "https://smart-urban-heat-map.ch/api/v2";

/// Endpoint serving the latest snapshot for all stations (GeoJSON)
pub const LATEST_ENDPOINT: &str = "latest";

/// Endpoint serving per-station time series (JSON)
pub const TIMESERIES_ENDPOINT: &str = "timeseries";

/// Query parameter names understood by the time-series endpoint
pub mod query_params {
    /// Station identifier (required)
    pub const STATION_ID: &str = "stationId";

    /// Inclusive lower time bound (optional, ISO 8601)
    pub const TIME_FROM: &str = "timeFrom";

    /// Inclusive upper time bound (optional, ISO 8601)
    pub const TIME_TO: &str = "timeTo";
}

/// Default HTTP request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// SensorThings Vocabulary
// =============================================================================

/// Fixed Thing entity text
pub mod thing {
    /// Description attached to every Thing
    pub const DESCRIPTION: &str = "Sensor station measuring temperature and humidity";
}

/// Fixed Location entity text
pub mod location {
    /// Description attached to every Location
    pub const DESCRIPTION: &str = "Geographic location of the sensor";

    /// GeoJSON encoding type identifier
    pub const ENCODING_TYPE: &str = "application/vnd.geo+json";
}

/// Observation type URL shared by both datastream kinds
pub const OBSERVATION_TYPE: &str =
    "http://www.opengis.net/def/observationType/OGC-OM/2.0/OM_Measurement";

/// UCUM unit definition URL shared by both datastream kinds
pub const UCUM_DEFINITION: &str = "http://unitsofmeasure.org/ucum.html#para-30";

/// Temperature channel vocabulary
pub mod temperature {
    /// Suffix appended to the station id to form the datastream id
    pub const DATASTREAM_SUFFIX: &str = "temperature";

    /// Datastream description
    pub const STREAM_DESCRIPTION: &str = "Temperature measurements";

    /// Unit of measurement symbol
    pub const UNIT_SYMBOL: &str = "°C";

    /// Unit of measurement name
    pub const UNIT_NAME: &str = "Degree Celsius";

    /// Observed property name
    pub const PROPERTY_NAME: &str = "Temperature";

    /// Observed property definition URL
    pub const PROPERTY_DEFINITION: &str = "http://sensorthings.org/Temperature";

    /// Sensor name
    pub const SENSOR_NAME: &str = "Temperature Sensor";

    /// Sensor description
    pub const SENSOR_DESCRIPTION: &str = "Measures air temperature";
}

/// Humidity channel vocabulary
pub mod humidity {
    /// Suffix appended to the station id to form the datastream id
    pub const DATASTREAM_SUFFIX: &str = "humidity";

    /// Datastream description
    pub const STREAM_DESCRIPTION: &str = "Humidity measurements";

    /// Unit of measurement symbol
    pub const UNIT_SYMBOL: &str = "%";

    /// Unit of measurement name
    pub const UNIT_NAME: &str = "Percentage";

    /// Observed property name
    pub const PROPERTY_NAME: &str = "Humidity";

    /// Observed property definition URL
    pub const PROPERTY_DEFINITION: &str = "http://sensorthings.org/Humidity";

    /// Sensor name
    pub const SENSOR_NAME: &str = "Humidity Sensor";

    /// Sensor description
    pub const SENSOR_DESCRIPTION: &str = "Measures relative humidity";
}

/// GeoJSON geometry type accepted for station locations
pub const GEOJSON_POINT_TYPE: &str = "Point";

// =============================================================================
// Timestamp Formats
// =============================================================================

/// Naive ISO 8601 rendering used for timestamps without an offset
/// (fractional seconds omitted when zero)
pub const ISO_NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Accepted naive datetime input formats, tried in order
pub const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Accepted date-only input format
pub const NAIVE_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Output Files
// =============================================================================

/// Default output filename for snapshot conversions
pub const SNAPSHOT_OUTPUT_FILENAME: &str = "sensor_things_output.json";

/// Default output filename for a station's time-series conversion
pub fn timeseries_output_filename(station_id: &str) -> String {
    format!("timeseries_{}.json", station_id)
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Build a datastream identifier from a station id and a channel suffix
pub fn datastream_id(station_id: &str, suffix: &str) -> String {
    format!("{}-{}", station_id, suffix)
}
