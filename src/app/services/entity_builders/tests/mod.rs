//! Test utilities and fixtures for entity builder testing
//!
//! This module provides station rows and time-series entries shared across
//! the builder test modules.

use crate::app::models::{
    ObservedTime, PointGeometry, StationId, StationRow, TimeSeriesEntry,
};

// Test modules
mod datastream_tests;

/// Create a complete row with both readings and a point geometry
pub fn create_test_row() -> StationRow {
    StationRow {
        station_id: StationId::from("11117"),
        name: "Gurtenpark".to_string(),
        outdated: Some(false),
        measurements_plausible: Some(true),
        geometry: Some(PointGeometry {
            x: 7.4446,
            y: 46.9382,
        }),
        date_observed: ObservedTime::parse("2024-11-01T00:00:00"),
        temperature: Some(21.5),
        relative_humidity: Some(60.0),
    }
}

/// Create a row lacking geometry but carrying both readings
pub fn create_test_row_without_geometry() -> StationRow {
    StationRow {
        geometry: None,
        ..create_test_row()
    }
}

/// Create a row reporting only temperature
pub fn create_temperature_only_row() -> StationRow {
    StationRow {
        relative_humidity: None,
        ..create_test_row()
    }
}

/// Create a short run of valid time-series entries
pub fn create_test_entries() -> Vec<TimeSeriesEntry> {
    vec![
        TimeSeriesEntry {
            date_observed: "2024-11-02T10:00:00Z".to_string(),
            temperature: Some(18.2),
            relative_humidity: Some(55.0),
        },
        TimeSeriesEntry {
            date_observed: "2024-11-02T10:10:00Z".to_string(),
            temperature: Some(18.4),
            relative_humidity: Some(54.5),
        },
    ]
}
