//! Integration tests for the snapshot conversion pipeline
//!
//! These tests drive the public converter API end-to-end with realistic
//! Smart Urban Heat Map payloads and verify the produced SensorThings
//! entity collections.

use async_trait::async_trait;
use sensorthings_converter::app::models::TimeSeriesPayload;
use sensorthings_converter::{Error, Result, SensorThingsConverter, SourceClient};

/// Snapshot payload in the shape delivered by the live API
const SNAPSHOT_PAYLOAD: &str = r#"{
    "type": "FeatureCollection",
    "crs": {
        "type": "name",
        "properties": { "name": "urn:ogc:def:crs:OGC:1.3:CRS84" }
    },
    "features": [
        {
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [7.4446, 46.9382]
            },
            "properties": {
                "stationId": "11117",
                "name": "Gurtenpark",
                "dateObserved": "2024-11-01T00:00:00",
                "temperature": 21.5,
                "relativeHumidity": 60.0
            }
        },
        {
            "type": "Feature",
            "geometry": null,
            "properties": {
                "stationId": "11118",
                "name": "Bundesplatz",
                "dateObserved": "2024-11-01T00:05:00",
                "temperature": 19.0
            }
        }
    ]
}"#;

/// Scripted source client answering with canned payloads
struct ScriptedClient {
    snapshot: std::result::Result<String, String>,
}

impl ScriptedClient {
    fn with_snapshot(payload: &str) -> Self {
        Self {
            snapshot: Ok(payload.to_string()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            snapshot: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl SourceClient for ScriptedClient {
    async fn fetch_snapshot(&self) -> Result<String> {
        match &self.snapshot {
            Ok(payload) => Ok(payload.clone()),
            Err(message) => Err(Error::transport(message.clone(), None)),
        }
    }

    async fn fetch_timeseries(
        &self,
        _station_id: &str,
        _time_from: Option<&str>,
        _time_to: Option<&str>,
    ) -> Result<TimeSeriesPayload> {
        Ok(TimeSeriesPayload::empty())
    }
}

/// Test the full snapshot pipeline against a realistic payload
///
/// Purpose: Validate end-to-end conversion from raw GeoJSON to entity collections
/// Benefit: Ensures the fetch, load and build stages compose correctly
#[tokio::test]
async fn test_snapshot_converts_to_full_entity_set() {
    let converter = SensorThingsConverter::new(ScriptedClient::with_snapshot(SNAPSHOT_PAYLOAD));

    let result = converter.convert().await.expect("conversion should succeed");

    // One Thing per station, unconditionally
    assert_eq!(result.things.len(), 2);
    // Only the station with a valid point gets a Location
    assert_eq!(result.locations.len(), 1);
    // Exactly two Datastreams per station, regardless of measurements
    assert_eq!(result.datastreams.len(), 4);
    // Three measurements present across both stations
    assert_eq!(result.observations.len(), 3);

    let thing = &result.things[0];
    assert_eq!(thing.name, "Gurtenpark");
    assert_eq!(
        thing.description,
        "Sensor station measuring temperature and humidity"
    );

    let location = &result.locations[0];
    assert_eq!(location.location.coordinates, [7.4446, 46.9382]);
    assert_eq!(location.encoding_type, "application/vnd.geo+json");

    let stream_ids: Vec<&str> = result
        .datastreams
        .iter()
        .map(|d| d.iot_id.as_str())
        .collect();
    assert_eq!(
        stream_ids,
        vec![
            "11117-temperature",
            "11117-humidity",
            "11118-temperature",
            "11118-humidity"
        ]
    );
}

/// Test observation values and timestamps for a known station
///
/// Purpose: Validate the measurement-to-Observation mapping end to end
/// Benefit: Ensures values and normalized timestamps survive the pipeline intact
#[tokio::test]
async fn test_snapshot_observation_values() {
    let converter = SensorThingsConverter::new(ScriptedClient::with_snapshot(SNAPSHOT_PAYLOAD));

    let result = converter.convert().await.expect("conversion should succeed");

    let gurtenpark: Vec<_> = result
        .observations
        .iter()
        .filter(|o| o.datastream.iot_id.starts_with("11117"))
        .collect();
    assert_eq!(gurtenpark.len(), 2);

    let temperature = gurtenpark
        .iter()
        .find(|o| o.datastream.iot_id == "11117-temperature")
        .expect("temperature observation should exist");
    assert_eq!(temperature.result, 21.5);
    assert_eq!(temperature.phenomenon_time, "2024-11-01T00:00:00");
    assert_eq!(temperature.result_time, "2024-11-01T00:00:00");

    let humidity = gurtenpark
        .iter()
        .find(|o| o.datastream.iot_id == "11117-humidity")
        .expect("humidity observation should exist");
    assert_eq!(humidity.result, 60.0);
    assert_eq!(humidity.phenomenon_time, humidity.result_time);

    // The humidity-less station yields a temperature observation only
    let bundesplatz: Vec<_> = result
        .observations
        .iter()
        .filter(|o| o.datastream.iot_id.starts_with("11118"))
        .collect();
    assert_eq!(bundesplatz.len(), 1);
    assert_eq!(bundesplatz[0].datastream.iot_id, "11118-temperature");
    assert_eq!(bundesplatz[0].result, 19.0);
}

/// Test the serialized output shape of a snapshot conversion
///
/// Purpose: Validate the JSON wire format down to the SensorThings key names
/// Benefit: Guards the contract consumed by downstream SensorThings imports
#[tokio::test]
async fn test_snapshot_serialized_shape() {
    let converter = SensorThingsConverter::new(ScriptedClient::with_snapshot(SNAPSHOT_PAYLOAD));

    let result = converter.convert().await.expect("conversion should succeed");
    let rendered = serde_json::to_string_pretty(&result).expect("result should serialize");
    let value: serde_json::Value = serde_json::from_str(&rendered).expect("output should reparse");

    let map = value.as_object().expect("output should be an object");
    assert_eq!(map.len(), 4);
    assert!(map.contains_key("Things"));
    assert!(map.contains_key("Locations"));
    assert!(map.contains_key("Datastreams"));
    assert!(map.contains_key("Observations"));

    let first_thing = &value["Things"][0];
    assert_eq!(first_thing["@iot.id"], "11117");
    assert_eq!(first_thing["name"], "Gurtenpark");

    let first_stream = &value["Datastreams"][0];
    assert_eq!(first_stream["@iot.id"], "11117-temperature");
    assert_eq!(first_stream["Thing"]["@iot.id"], "11117");
    assert_eq!(first_stream["unitOfMeasurement"]["symbol"], "°C");
    assert_eq!(
        first_stream["observationType"],
        "http://www.opengis.net/def/observationType/OGC-OM/2.0/OM_Measurement"
    );

    let first_observation = &value["Observations"][0];
    assert_eq!(first_observation["phenomenonTime"], "2024-11-01T00:00:00");
    assert_eq!(first_observation["resultTime"], "2024-11-01T00:00:00");
    assert_eq!(first_observation["result"], 21.5);
}

/// Test that repeated conversions produce identical output
///
/// Purpose: Validate byte-for-byte idempotency of the snapshot pipeline
/// Benefit: Ensures stable identifiers and ordering across repeated runs
#[tokio::test]
async fn test_snapshot_conversion_is_idempotent() {
    let converter = SensorThingsConverter::new(ScriptedClient::with_snapshot(SNAPSHOT_PAYLOAD));

    let first = converter.convert().await.expect("first run should succeed");
    let second = converter
        .convert()
        .await
        .expect("second run should succeed");

    let first_rendered = serde_json::to_string(&first).expect("first result should serialize");
    let second_rendered = serde_json::to_string(&second).expect("second result should serialize");
    assert_eq!(first_rendered, second_rendered);
}

/// Test the fail-fast policy of the snapshot path
///
/// Purpose: Validate that upstream failures propagate instead of degrading
/// Benefit: Prevents silently publishing an empty entity set as a real snapshot
#[tokio::test]
async fn test_snapshot_transport_failure_propagates() {
    let converter = SensorThingsConverter::new(ScriptedClient::failing("HTTP 503"));

    let result = converter.convert().await;
    assert!(matches!(result, Err(Error::Transport { .. })));
}

/// Test the fail-fast policy for unparseable snapshot payloads
///
/// Purpose: Validate that a non-GeoJSON body surfaces as a parse error
/// Benefit: Distinguishes broken upstream data from an empty station set
#[tokio::test]
async fn test_snapshot_parse_failure_propagates() {
    let converter = SensorThingsConverter::new(ScriptedClient::with_snapshot("not json at all"));

    let result = converter.convert().await;
    assert!(matches!(result, Err(Error::Parse { .. })));
}

/// Test conversion of an empty feature collection
///
/// Purpose: Validate that zero stations produce empty collections, not errors
/// Benefit: Keeps scheduled conversions quiet when the network reports nothing
#[tokio::test]
async fn test_snapshot_empty_feature_collection() {
    let payload = r#"{"type": "FeatureCollection", "features": []}"#;
    let converter = SensorThingsConverter::new(ScriptedClient::with_snapshot(payload));

    let result = converter.convert().await.expect("conversion should succeed");
    assert!(result.things.is_empty());
    assert!(result.locations.is_empty());
    assert!(result.datastreams.is_empty());
    assert!(result.observations.is_empty());
}
