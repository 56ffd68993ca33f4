//! Core snapshot feature loading implementation
//!
//! This module decodes the GeoJSON feature collection delivered by the latest
//! endpoint and extracts one station row per usable feature.

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::stats::{LoadResult, LoadStats};
use crate::app::models::{ObservedTime, PointGeometry, StationId, StationRow};
use crate::constants::GEOJSON_POINT_TYPE;
use crate::{Error, Result};

/// Wire form of the snapshot payload (GeoJSON FeatureCollection subset)
#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
    #[serde(default)]
    crs: Option<CrsBlock>,
}

#[derive(Debug, Deserialize)]
struct CrsBlock {
    #[serde(default)]
    properties: Option<CrsProperties>,
}

#[derive(Debug, Deserialize)]
struct CrsProperties {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    geometry: Option<FeatureGeometry>,
    #[serde(default)]
    properties: Option<FeatureProperties>,
}

#[derive(Debug, Deserialize)]
struct FeatureGeometry {
    #[serde(rename = "type", default)]
    geometry_type: Option<String>,
    #[serde(default)]
    coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeatureProperties {
    #[serde(default)]
    station_id: Option<StationId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    date_observed: Option<String>,
    #[serde(default)]
    temperature: Option<f64>,
    #[serde(default)]
    relative_humidity: Option<f64>,
    #[serde(default)]
    outdated: Option<bool>,
    #[serde(default)]
    measurements_plausible: Option<bool>,
}

/// Loader for latest-snapshot GeoJSON payloads
///
/// The loader focuses on essential functionality:
/// - Tolerant decoding of the upstream feature collection
/// - Station row extraction with optional point geometry
/// - Graceful skipping of features without a station id
#[derive(Debug, Default)]
pub struct FeatureLoader;

impl FeatureLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self
    }

    /// Load station rows from a raw snapshot payload
    pub fn load(&self, payload: &str) -> Result<LoadResult> {
        let collection: FeatureCollection = serde_json::from_str(payload).map_err(|e| {
            Error::parse(
                "Snapshot payload is not a GeoJSON feature collection",
                Some(e),
            )
        })?;

        let crs_name = collection
            .crs
            .and_then(|block| block.properties)
            .and_then(|properties| properties.name);

        let mut stats = LoadStats::new();
        stats.total_features = collection.features.len();

        let mut rows = Vec::with_capacity(collection.features.len());
        for (index, feature) in collection.features.into_iter().enumerate() {
            match Self::extract_row(feature) {
                Some(row) => {
                    rows.push(row);
                    stats.rows_loaded += 1;
                }
                None => {
                    warn!("Skipping feature {} without a station id", index);
                    stats
                        .errors
                        .push(format!("Feature {}: missing stationId", index));
                    stats.features_skipped += 1;
                }
            }
        }

        info!(
            "Loaded {} station rows from {} features (CRS: {})",
            stats.rows_loaded,
            stats.total_features,
            crs_name.as_deref().unwrap_or("unspecified")
        );

        Ok(LoadResult {
            rows,
            crs_name,
            stats,
        })
    }

    /// Extract a station row from a single feature
    ///
    /// Returns `None` only when the feature carries no station id. Every
    /// other irregularity degrades field by field: a missing or non-point
    /// geometry yields a row without position, missing measurements stay
    /// absent.
    fn extract_row(feature: Feature) -> Option<StationRow> {
        let properties = feature.properties?;
        let station_id = properties.station_id?;

        let geometry = feature.geometry.as_ref().and_then(Self::extract_point);
        if geometry.is_none() {
            debug!("Feature for station {} has no usable point geometry", station_id);
        }

        let date_observed = properties.date_observed.unwrap_or_default();

        Some(StationRow {
            station_id,
            name: properties.name.unwrap_or_default(),
            outdated: properties.outdated,
            measurements_plausible: properties.measurements_plausible,
            geometry,
            date_observed: ObservedTime::parse(&date_observed),
            temperature: properties.temperature,
            relative_humidity: properties.relative_humidity,
        })
    }

    /// Extract a point position from a feature geometry
    fn extract_point(geometry: &FeatureGeometry) -> Option<PointGeometry> {
        if geometry.geometry_type.as_deref() != Some(GEOJSON_POINT_TYPE) {
            return None;
        }

        match geometry.coordinates.as_slice() {
            [x, y, ..] => Some(PointGeometry { x: *x, y: *y }),
            _ => None,
        }
    }
}
