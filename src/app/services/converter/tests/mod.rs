//! Test utilities and mock infrastructure for facade testing
//!
//! This module provides a scriptable upstream source plus payload fixtures
//! shared across the facade test modules.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::app::models::{TimeSeriesEntry, TimeSeriesPayload};
use crate::app::services::converter::source::SourceClient;
use crate::{Error, Result};


/// Arguments captured from the last time-series fetch
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedQuery {
    pub station_id: String,
    pub time_from: Option<String>,
    pub time_to: Option<String>,
}

/// Scriptable upstream source for facade testing
///
/// Each operation either answers with a prepared payload or fails with a
/// transport error, so both facade failure policies can be exercised
/// without network access. Clones share the captured-query slot, letting a
/// test keep a handle after moving the mock into a facade.
#[derive(Clone)]
pub struct MockSourceClient {
    snapshot: std::result::Result<String, String>,
    timeseries: std::result::Result<TimeSeriesPayload, String>,
    captured: Arc<Mutex<Option<CapturedQuery>>>,
}

impl MockSourceClient {
    /// Source answering the snapshot fetch with the given payload
    pub fn with_snapshot(payload: impl Into<String>) -> Self {
        Self {
            snapshot: Ok(payload.into()),
            timeseries: Ok(TimeSeriesPayload::empty()),
            captured: Arc::new(Mutex::new(None)),
        }
    }

    /// Source answering the time-series fetch with the given payload
    pub fn with_timeseries(payload: TimeSeriesPayload) -> Self {
        Self {
            snapshot: Ok(String::new()),
            timeseries: Ok(payload),
            captured: Arc::new(Mutex::new(None)),
        }
    }

    /// Source failing every fetch with a transport error
    pub fn failing(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            snapshot: Err(message.clone()),
            timeseries: Err(message),
            captured: Arc::new(Mutex::new(None)),
        }
    }

    /// Arguments the facade passed to the last time-series fetch
    pub fn captured_query(&self) -> Option<CapturedQuery> {
        self.captured.lock().unwrap().clone()
    }
}

#[async_trait]
impl SourceClient for MockSourceClient {
    async fn fetch_snapshot(&self) -> Result<String> {
        match &self.snapshot {
            Ok(payload) => Ok(payload.clone()),
            Err(message) => Err(Error::transport(message.clone(), None)),
        }
    }

    async fn fetch_timeseries(
        &self,
        station_id: &str,
        time_from: Option<&str>,
        time_to: Option<&str>,
    ) -> Result<TimeSeriesPayload> {
        *self.captured.lock().unwrap() = Some(CapturedQuery {
            station_id: station_id.to_string(),
            time_from: time_from.map(str::to_string),
            time_to: time_to.map(str::to_string),
        });

        match &self.timeseries {
            Ok(payload) => Ok(payload.clone()),
            Err(message) => Err(Error::transport(message.clone(), None)),
        }
    }
}

/// Snapshot payload with two stations, one of them lacking geometry
pub fn create_mixed_snapshot() -> String {
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
                    "relativeHumidity": 60,
                    "outdated": false,
                    "measurementsPlausible": true
                }
            },
            {
                "type": "Feature",
                "geometry": null,
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

/// Time-series payload with two full entries
pub fn create_timeseries_payload() -> TimeSeriesPayload {
    TimeSeriesPayload::Entries(vec![
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
    ])
}
