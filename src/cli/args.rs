//! Command-line argument definitions for the SensorThings converter
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::app::models::ObservedTime;
use crate::config::Config;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, SNAPSHOT_OUTPUT_FILENAME,
    timeseries_output_filename,
};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// CLI arguments for the SensorThings converter
///
/// Converts Smart Urban Heat Map station measurements into OGC SensorThings
/// API entities (Things, Locations, Datastreams, Observations).
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sensorthings-converter",
    version,
    about = "Convert Smart Urban Heat Map station data into OGC SensorThings entities",
    long_about = "A tool that converts Smart Urban Heat Map station measurements into the \
                  OGC SensorThings API entity model. The latest snapshot becomes a full set \
                  of Things, Locations, Datastreams and Observations; a station's time series \
                  becomes Observations referencing that station's datastreams."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the SensorThings converter
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert the latest snapshot into the full SensorThings entity set
    Latest(LatestArgs),
    /// Convert a station's time series into SensorThings Observations
    Timeseries(TimeseriesArgs),
}

/// Arguments for the latest command (snapshot conversion)
#[derive(Debug, Clone, Parser)]
pub struct LatestArgs {
    /// Base URL of the Smart Urban Heat Map API
    ///
    /// The converter requests the `latest` endpoint below this URL.
    #[arg(
        long = "base-url",
        value_name = "URL",
        default_value = DEFAULT_BASE_URL,
        help = "Base URL of the Smart Urban Heat Map API"
    )]
    pub base_url: String,

    /// HTTP request timeout in seconds
    #[arg(
        long = "timeout",
        value_name = "SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS,
        help = "HTTP request timeout in seconds"
    )]
    pub timeout_secs: u64,

    /// Output file for the converted entities
    ///
    /// If neither this nor --save is given, the result is printed to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for the converted entities"
    )]
    pub output_file: Option<PathBuf>,

    /// Write the result to the default output file instead of stdout
    #[arg(
        long = "save",
        help = "Write the result to the default output file instead of stdout"
    )]
    pub save: bool,

    /// Emit compact JSON instead of pretty-printed output
    #[arg(
        long = "compact",
        help = "Emit compact JSON instead of pretty-printed output"
    )]
    pub compact: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the timeseries command (per-station conversion)
#[derive(Debug, Clone, Parser)]
pub struct TimeseriesArgs {
    /// Station identifier for the time-series query
    #[arg(
        short = 's',
        long = "station-id",
        value_name = "ID",
        help = "Station identifier for the time-series query (e.g. 11117)"
    )]
    pub station_id: String,

    /// Start of the time range
    #[arg(
        long = "time-from",
        value_name = "TIMESTAMP",
        help = "Start of the time range (ISO 8601, e.g. 2024-11-01T00:00:00Z)"
    )]
    pub time_from: Option<String>,

    /// End of the time range
    #[arg(
        long = "time-to",
        value_name = "TIMESTAMP",
        help = "End of the time range (ISO 8601, e.g. 2024-11-05T00:00:00Z)"
    )]
    pub time_to: Option<String>,

    /// Base URL of the Smart Urban Heat Map API
    ///
    /// The converter requests the `timeseries` endpoint below this URL.
    #[arg(
        long = "base-url",
        value_name = "URL",
        default_value = DEFAULT_BASE_URL,
        help = "Base URL of the Smart Urban Heat Map API"
    )]
    pub base_url: String,

    /// HTTP request timeout in seconds
    #[arg(
        long = "timeout",
        value_name = "SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS,
        help = "HTTP request timeout in seconds"
    )]
    pub timeout_secs: u64,

    /// Output file for the converted observations
    ///
    /// If neither this nor --save is given, the result is printed to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for the converted observations"
    )]
    pub output_file: Option<PathBuf>,

    /// Write the result to the default output file instead of stdout
    ///
    /// The default filename embeds the station id, e.g. timeseries_11117.json.
    #[arg(
        long = "save",
        help = "Write the result to the default output file instead of stdout"
    )]
    pub save: bool,

    /// Emit compact JSON instead of pretty-printed output
    #[arg(
        long = "compact",
        help = "Emit compact JSON instead of pretty-printed output"
    )]
    pub compact: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl LatestArgs {
    /// Validate the latest command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_output_file(self.output_file.as_deref())
    }

    /// Build the runtime configuration from these arguments
    pub fn to_config(&self) -> Config {
        let config = Config::default()
            .with_base_url(self.base_url.clone())
            .with_request_timeout_secs(self.timeout_secs);

        if self.compact {
            config.with_compact_output()
        } else {
            config
        }
    }

    /// Resolve where the result should be written, if anywhere
    pub fn resolve_output_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.output_file {
            Some(path.clone())
        } else if self.save {
            Some(PathBuf::from(SNAPSHOT_OUTPUT_FILENAME))
        } else {
            None
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl TimeseriesArgs {
    /// Validate the timeseries command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.station_id.trim().is_empty() {
            return Err(Error::configuration(
                "Station id cannot be empty".to_string(),
            ));
        }

        if let Some(time_from) = &self.time_from {
            if ObservedTime::parse_strict(time_from).is_err() {
                return Err(Error::configuration(format!(
                    "Invalid --time-from value: {}",
                    time_from
                )));
            }
        }

        if let Some(time_to) = &self.time_to {
            if ObservedTime::parse_strict(time_to).is_err() {
                return Err(Error::configuration(format!(
                    "Invalid --time-to value: {}",
                    time_to
                )));
            }
        }

        validate_output_file(self.output_file.as_deref())
    }

    /// Build the runtime configuration from these arguments
    pub fn to_config(&self) -> Config {
        let config = Config::default()
            .with_base_url(self.base_url.clone())
            .with_request_timeout_secs(self.timeout_secs);

        if self.compact {
            config.with_compact_output()
        } else {
            config
        }
    }

    /// Resolve where the result should be written, if anywhere
    pub fn resolve_output_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.output_file {
            Some(path.clone())
        } else if self.save {
            Some(PathBuf::from(timeseries_output_filename(&self.station_id)))
        } else {
            None
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Check that an explicit output file lands in an existing directory
fn validate_output_file(output_file: Option<&Path>) -> Result<()> {
    if let Some(output_file) = output_file {
        if let Some(parent) = output_file.parent() {
            // A bare filename has an empty parent and writes into the
            // working directory
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::configuration(format!(
                    "Output file directory does not exist: {}",
                    parent.display()
                )));
            }
        }
    }

    Ok(())
}

impl Default for LatestArgs {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            output_file: None,
            save: false,
            compact: false,
            verbose: 0,
            quiet: false,
        }
    }
}

impl Default for TimeseriesArgs {
    fn default() -> Self {
        Self {
            station_id: String::new(),
            time_from: None,
            time_to: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            output_file: None,
            save: false,
            compact: false,
            verbose: 0,
            quiet: false,
        }
    }
}
