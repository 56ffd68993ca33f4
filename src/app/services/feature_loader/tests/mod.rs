//! Test utilities and fixtures for feature loader testing
//!
//! This module provides snapshot payload fixtures shared across the loader
//! test modules.


/// Complete snapshot payload with two healthy stations
pub fn create_test_feature_collection() -> String {
    r#"{
        "type": "FeatureCollection",
        "crs": {"type": "name", "properties": {"name": "urn:ogc:def:crs:OGC:1.3:CRS84"}},
        "features": [
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [7.4446, 46.9382]},
                "properties": {
                    "stationId": "11117",
                    "name": "Gurtenpark",
                    "dateObserved": "2024-11-01T00:00:00",
                    "temperature": 21.5,
                    "relativeHumidity": 60,
                    "outdated": false,
                    "measurementsPlausible": true
                }
            },
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [7.4474, 46.9480]},
                "properties": {
                    "stationId": "11118",
                    "name": "Bundesplatz",
                    "dateObserved": "2024-11-01T00:10:00",
                    "temperature": 19.8,
                    "relativeHumidity": 65.5,
                    "outdated": false,
                    "measurementsPlausible": true
                }
            }
        ]
    }"#
    .to_string()
}

/// Payload whose single feature carries no geometry
pub fn create_payload_without_geometry() -> String {
    r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": null,
                "properties": {
                    "stationId": "11119",
                    "name": "Lorraine",
                    "dateObserved": "2024-11-01T00:00:00",
                    "temperature": 18.0,
                    "relativeHumidity": 70
                }
            }
        ]
    }"#
    .to_string()
}

/// Payload mixing a usable feature with one lacking a station id
pub fn create_payload_with_anonymous_feature() -> String {
    r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [7.4446, 46.9382]},
                "properties": {
                    "stationId": "11117",
                    "name": "Gurtenpark",
                    "dateObserved": "2024-11-01T00:00:00",
                    "temperature": 21.5,
                    "relativeHumidity": 60
                }
            },
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [7.4474, 46.9480]},
                "properties": {
                    "name": "Unnamed sensor",
                    "dateObserved": "2024-11-01T00:10:00",
                    "temperature": 19.8
                }
            }
        ]
    }"#
    .to_string()
}

/// Payload with no features at all
pub fn create_empty_feature_collection() -> String {
    r#"{"type": "FeatureCollection", "features": []}"#.to_string()
}
