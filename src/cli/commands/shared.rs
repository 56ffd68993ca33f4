//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! both CLI command implementations.

use crate::app::models::{SnapshotConversion, TimeSeriesConversion};
use crate::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Conversion statistics for reporting across both commands
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Number of Thing entities built
    pub things: usize,
    /// Number of Location entities built
    pub locations: usize,
    /// Number of Datastream entities built
    pub datastreams: usize,
    /// Number of Observation entities built
    pub observations: usize,
    /// Total conversion time
    pub conversion_time: std::time::Duration,
    /// Output file the result was written to, if any
    pub output_file: Option<PathBuf>,
    /// Size of the written output in bytes
    pub output_size: Option<u64>,
}

impl ConversionStats {
    /// Build stats from a snapshot conversion result
    pub fn from_snapshot(result: &SnapshotConversion, conversion_time: std::time::Duration) -> Self {
        Self {
            things: result.things.len(),
            locations: result.locations.len(),
            datastreams: result.datastreams.len(),
            observations: result.observations.len(),
            conversion_time,
            output_file: None,
            output_size: None,
        }
    }

    /// Build stats from a time-series conversion result
    pub fn from_timeseries(
        result: &TimeSeriesConversion,
        conversion_time: std::time::Duration,
    ) -> Self {
        Self {
            observations: result.observations.len(),
            conversion_time,
            ..Default::default()
        }
    }

    /// Total number of entities across all collections
    pub fn total_entities(&self) -> usize {
        self.things + self.locations + self.datastreams + self.observations
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sensorthings_converter={}", log_level)));

    // Set up subscriber based on output format preference
    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Serialize a conversion result to JSON
pub fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    rendered
        .map_err(|e| Error::conversion(format!("Failed to serialize conversion result: {}", e)))
}

/// Write the rendered result to a file and report its size
pub fn write_output_file(path: &Path, contents: &str) -> Result<u64> {
    std::fs::write(path, contents).map_err(|e| {
        Error::io(
            format!("Failed to write output file '{}'", path.display()),
            e,
        )
    })?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(contents.len() as u64)
}
