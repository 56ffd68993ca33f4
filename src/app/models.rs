//! Data models for SensorThings conversion
//!
//! This module contains the intermediate row records parsed from the upstream
//! feeds and the SensorThings entity structures produced by the builders,
//! following the OGC SensorThings API entity naming.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    self, ISO_NAIVE_DATETIME_FORMAT, NAIVE_DATE_FORMAT, NAIVE_DATETIME_FORMATS,
};
use crate::{Error, Result};

// =============================================================================
// Station Identity
// =============================================================================

/// Station identifier as delivered by the upstream API
///
/// The feed is inconsistent about identifier types: some deployments send
/// station ids as JSON strings, others as integers. The identifier is kept
/// in its original form so that `@iot.id` values round-trip unchanged, while
/// [`fmt::Display`] provides the textual form used to derive datastream ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StationId {
    /// Identifier delivered as a JSON string
    Text(String),
    /// Identifier delivered as a JSON integer
    Number(i64),
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationId::Text(value) => write!(f, "{}", value),
            StationId::Number(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for StationId {
    fn from(value: &str) -> Self {
        StationId::Text(value.to_string())
    }
}

impl From<i64> for StationId {
    fn from(value: i64) -> Self {
        StationId::Number(value)
    }
}

// =============================================================================
// Observation Timestamps
// =============================================================================

/// A measurement timestamp in one of the forms the upstream feeds deliver
///
/// Offset-aware and naive timestamps render as ISO 8601; input that matches
/// no supported format is carried through verbatim so that snapshot rows are
/// never lost to an unrecognized notation.
#[derive(Debug, Clone, PartialEq)]
pub enum ObservedTime {
    /// Timestamp with an explicit UTC offset
    Offset(DateTime<FixedOffset>),
    /// Timestamp without offset information
    Naive(NaiveDateTime),
    /// Unrecognized input, preserved as delivered
    Raw(String),
}

impl ObservedTime {
    /// Parse a timestamp, falling back to the raw string when no format matches
    pub fn parse(value: &str) -> Self {
        Self::parse_strict(value).unwrap_or_else(|_| Self::Raw(value.to_string()))
    }

    /// Parse a timestamp, failing when no supported format matches
    pub fn parse_strict(value: &str) -> Result<Self> {
        let trimmed = value.trim();

        match DateTime::parse_from_rfc3339(trimmed) {
            Ok(parsed) => Ok(Self::Offset(parsed)),
            Err(rfc3339_error) => {
                for format in NAIVE_DATETIME_FORMATS {
                    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
                        return Ok(Self::Naive(parsed));
                    }
                }

                if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, NAIVE_DATE_FORMAT) {
                    if let Some(start_of_day) = parsed.and_hms_opt(0, 0, 0) {
                        return Ok(Self::Naive(start_of_day));
                    }
                }

                Err(Error::timestamp_parsing(
                    format!("Unsupported timestamp '{}'", trimmed),
                    rfc3339_error,
                ))
            }
        }
    }

    /// Render as ISO 8601 (raw values pass through unchanged)
    pub fn to_iso8601(&self) -> String {
        match self {
            Self::Offset(timestamp) => timestamp.to_rfc3339(),
            Self::Naive(timestamp) => timestamp.format(ISO_NAIVE_DATETIME_FORMAT).to_string(),
            Self::Raw(value) => value.clone(),
        }
    }
}

// =============================================================================
// Intermediate Row Records
// =============================================================================

/// Station point position extracted from a snapshot feature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointGeometry {
    /// Longitude (GeoJSON x coordinate)
    pub x: f64,
    /// Latitude (GeoJSON y coordinate)
    pub y: f64,
}

/// One station's state in the latest snapshot
///
/// Produced by the feature loader, one per feature. Geometry is optional:
/// rows without a valid point still derive Thing, Datastream and Observation
/// entities, only the Location is skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRow {
    /// Unique station identifier
    pub station_id: StationId,

    /// Human-readable station name
    pub name: String,

    /// Whether the station's snapshot values are stale
    pub outdated: Option<bool>,

    /// Whether the station's measurements are considered plausible
    pub measurements_plausible: Option<bool>,

    /// Station position, absent when the feature carries no valid point
    pub geometry: Option<PointGeometry>,

    /// Timestamp of the snapshot measurements
    pub date_observed: ObservedTime,

    /// Air temperature reading in degrees Celsius
    pub temperature: Option<f64>,

    /// Relative humidity reading in percent
    pub relative_humidity: Option<f64>,
}

/// One sample in a station's time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesEntry {
    /// Sample timestamp (ISO 8601 string)
    #[serde(default)]
    pub date_observed: String,

    /// Air temperature reading in degrees Celsius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Relative humidity reading in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_humidity: Option<f64>,
}

/// Raw time-series payload as delivered by the upstream API
///
/// The endpoint answers either with a bare JSON array of entries or with an
/// object wrapping the same array under a `values` key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TimeSeriesPayload {
    /// Bare array of entries
    Entries(Vec<TimeSeriesEntry>),
    /// Object form with the entries under `values`
    Wrapped {
        #[serde(default)]
        values: Vec<TimeSeriesEntry>,
    },
}

impl TimeSeriesPayload {
    /// Flatten both payload forms into the entry list
    pub fn into_entries(self) -> Vec<TimeSeriesEntry> {
        match self {
            TimeSeriesPayload::Entries(entries) => entries,
            TimeSeriesPayload::Wrapped { values } => values,
        }
    }

    /// Empty payload, used when the upstream answers with no content
    pub fn empty() -> Self {
        TimeSeriesPayload::Entries(Vec::new())
    }
}

// =============================================================================
// Observed Channels
// =============================================================================

/// The two observed-property channels every station exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservedKind {
    Temperature,
    Humidity,
}

impl ObservedKind {
    /// Both channels, in the order entities are emitted
    pub const ALL: [ObservedKind; 2] = [ObservedKind::Temperature, ObservedKind::Humidity];

    /// Suffix appended to the station id to form the datastream id
    pub fn datastream_suffix(&self) -> &'static str {
        match self {
            ObservedKind::Temperature => constants::temperature::DATASTREAM_SUFFIX,
            ObservedKind::Humidity => constants::humidity::DATASTREAM_SUFFIX,
        }
    }

    /// Derive the datastream identifier for a station
    pub fn datastream_id(&self, station_id: &StationId) -> String {
        constants::datastream_id(&station_id.to_string(), self.datastream_suffix())
    }

    /// Datastream display name for a station
    pub fn stream_name(&self, station_name: &str) -> String {
        format!("{} Datastream for {}", self.property_name(), station_name)
    }

    /// Datastream description
    pub fn stream_description(&self) -> &'static str {
        match self {
            ObservedKind::Temperature => constants::temperature::STREAM_DESCRIPTION,
            ObservedKind::Humidity => constants::humidity::STREAM_DESCRIPTION,
        }
    }

    /// Observed property name ("Temperature" / "Humidity")
    pub fn property_name(&self) -> &'static str {
        match self {
            ObservedKind::Temperature => constants::temperature::PROPERTY_NAME,
            ObservedKind::Humidity => constants::humidity::PROPERTY_NAME,
        }
    }

    /// Unit of measurement for this channel
    pub fn unit_of_measurement(&self) -> UnitOfMeasurement {
        match self {
            ObservedKind::Temperature => UnitOfMeasurement {
                symbol: constants::temperature::UNIT_SYMBOL.to_string(),
                name: constants::temperature::UNIT_NAME.to_string(),
                definition: constants::UCUM_DEFINITION.to_string(),
            },
            ObservedKind::Humidity => UnitOfMeasurement {
                symbol: constants::humidity::UNIT_SYMBOL.to_string(),
                name: constants::humidity::UNIT_NAME.to_string(),
                definition: constants::UCUM_DEFINITION.to_string(),
            },
        }
    }

    /// Observed property for this channel
    pub fn observed_property(&self) -> ObservedProperty {
        let definition = match self {
            ObservedKind::Temperature => constants::temperature::PROPERTY_DEFINITION,
            ObservedKind::Humidity => constants::humidity::PROPERTY_DEFINITION,
        };
        ObservedProperty {
            name: self.property_name().to_string(),
            definition: definition.to_string(),
        }
    }

    /// Sensor metadata for this channel
    pub fn sensor(&self) -> Sensor {
        match self {
            ObservedKind::Temperature => Sensor {
                name: constants::temperature::SENSOR_NAME.to_string(),
                description: constants::temperature::SENSOR_DESCRIPTION.to_string(),
            },
            ObservedKind::Humidity => Sensor {
                name: constants::humidity::SENSOR_NAME.to_string(),
                description: constants::humidity::SENSOR_DESCRIPTION.to_string(),
            },
        }
    }

    /// Pick this channel's reading from a snapshot row
    pub fn reading(&self, row: &StationRow) -> Option<f64> {
        match self {
            ObservedKind::Temperature => row.temperature,
            ObservedKind::Humidity => row.relative_humidity,
        }
    }

    /// Pick this channel's reading from a time-series entry
    pub fn entry_reading(&self, entry: &TimeSeriesEntry) -> Option<f64> {
        match self {
            ObservedKind::Temperature => entry.temperature,
            ObservedKind::Humidity => entry.relative_humidity,
        }
    }
}

impl fmt::Display for ObservedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.property_name())
    }
}

// =============================================================================
// SensorThings Entities
// =============================================================================

/// SensorThings Thing: a physical sensor station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thing {
    /// Station identifier
    #[serde(rename = "@iot.id")]
    pub iot_id: StationId,

    /// Station name
    pub name: String,

    /// Fixed station description
    pub description: String,

    /// Station quality flags
    pub properties: ThingProperties,
}

/// Quality flags carried in a Thing's properties bag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThingProperties {
    /// Whether the station's snapshot values are stale
    pub outdated: Option<bool>,

    /// Whether the station's measurements are considered plausible
    pub measurements_plausible: Option<bool>,
}

/// SensorThings Location: a station's geographic point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Same identifier as the owning Thing (1:1 by convention)
    #[serde(rename = "@iot.id")]
    pub iot_id: StationId,

    /// Station name
    pub name: String,

    /// Fixed location description
    pub description: String,

    /// GeoJSON encoding type identifier
    #[serde(rename = "encodingType")]
    pub encoding_type: String,

    /// Point geometry in GeoJSON form
    pub location: GeoJsonPoint,
}

/// GeoJSON point value embedded in a Location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonPoint {
    /// Always "Point"
    #[serde(rename = "type")]
    pub geometry_type: String,

    /// Longitude, latitude
    pub coordinates: [f64; 2],
}

impl GeoJsonPoint {
    /// Build from an extracted station position
    pub fn from_geometry(geometry: &PointGeometry) -> Self {
        Self {
            geometry_type: constants::GEOJSON_POINT_TYPE.to_string(),
            coordinates: [geometry.x, geometry.y],
        }
    }
}

/// Unit of measurement attached to a Datastream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitOfMeasurement {
    pub symbol: String,
    pub name: String,
    pub definition: String,
}

/// Observed property embedded in a Datastream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedProperty {
    pub name: String,
    pub definition: String,
}

/// Sensor metadata embedded in a Datastream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub name: String,
    pub description: String,
}

/// Reference to a Thing by its identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThingRef {
    #[serde(rename = "@iot.id")]
    pub iot_id: StationId,
}

/// Reference to a Datastream by its identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatastreamRef {
    #[serde(rename = "@iot.id")]
    pub iot_id: String,
}

/// SensorThings Datastream: one observed-property channel of a Thing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datastream {
    /// Derived identifier: `{stationId}-temperature` or `{stationId}-humidity`
    #[serde(rename = "@iot.id")]
    pub iot_id: String,

    /// Channel display name
    pub name: String,

    /// Channel description
    pub description: String,

    /// Unit of measurement
    #[serde(rename = "unitOfMeasurement")]
    pub unit_of_measurement: UnitOfMeasurement,

    /// OGC observation type URL
    #[serde(rename = "observationType")]
    pub observation_type: String,

    /// Owning Thing reference
    #[serde(rename = "Thing")]
    pub thing: ThingRef,

    /// Observed property for this channel
    #[serde(rename = "ObservedProperty")]
    pub observed_property: ObservedProperty,

    /// Sensor metadata for this channel
    #[serde(rename = "Sensor")]
    pub sensor: Sensor,
}

/// SensorThings Observation: one timestamped measurement value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Datastream this measurement belongs to
    #[serde(rename = "Datastream")]
    pub datastream: DatastreamRef,

    /// Time the phenomenon was observed (ISO 8601)
    #[serde(rename = "phenomenonTime")]
    pub phenomenon_time: String,

    /// Time the result was produced, always equal to `phenomenon_time`
    #[serde(rename = "resultTime")]
    pub result_time: String,

    /// Measured value
    pub result: f64,
}

// =============================================================================
// Conversion Results
// =============================================================================

/// Complete snapshot conversion output, keyed by entity collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotConversion {
    #[serde(rename = "Things")]
    pub things: Vec<Thing>,

    #[serde(rename = "Locations")]
    pub locations: Vec<Location>,

    #[serde(rename = "Datastreams")]
    pub datastreams: Vec<Datastream>,

    #[serde(rename = "Observations")]
    pub observations: Vec<Observation>,
}

impl SnapshotConversion {
    /// Total number of entities across all four collections
    pub fn entity_count(&self) -> usize {
        self.things.len()
            + self.locations.len()
            + self.datastreams.len()
            + self.observations.len()
    }
}

/// Time-series conversion output: observations only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesConversion {
    #[serde(rename = "Observations")]
    pub observations: Vec<Observation>,
}

impl TimeSeriesConversion {
    /// Result with no observations, the degraded and the no-data outcome
    pub fn empty() -> Self {
        Self {
            observations: Vec::new(),
        }
    }
}
