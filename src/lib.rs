//! SensorThings Converter Library
//!
//! A Rust library for converting Smart Urban Heat Map station measurements
//! into OGC SensorThings API entities (Things, Locations, Datastreams,
//! Observations).
//!
//! This library provides tools for:
//! - Fetching the latest snapshot feed and per-station time series over HTTP
//! - Parsing GeoJSON-like feature collections into station row records
//! - Deriving the four entity collections with stable, derivable identifiers
//! - Normalizing observation timestamps to ISO 8601
//! - Tolerating stations with partial or missing measurements

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod converter;
        pub mod entity_builders;
        pub mod feature_loader;
        pub mod heat_map_client;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{SnapshotConversion, StationRow, TimeSeriesConversion};
pub use app::services::converter::{SensorThingsConverter, SourceClient};
pub use config::Config;

/// Result type alias for the SensorThings converter
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for SensorThings conversion operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// HTTP transport failure (non-success status or connection error)
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Raw payload could not be parsed
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Caller supplied an unusable argument
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Conversion could not be completed
    #[error("Conversion failure: {message}")]
    Conversion { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Timestamp parsing error
    #[error("Timestamp parsing error: {message}")]
    TimestampParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Conversion interrupted
    #[error("Conversion interrupted: {reason}")]
    Interrupted { reason: String },
}

impl Error {
    /// Create a transport error with optional context
    pub fn transport(message: impl Into<String>, source: Option<reqwest::Error>) -> Self {
        Self::Transport {
            message: message.into(),
            source,
        }
    }

    /// Create a parse error with optional context
    pub fn parse(message: impl Into<String>, source: Option<serde_json::Error>) -> Self {
        Self::Parse {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a conversion failure
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a timestamp parsing error with context
    pub fn timestamp_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::TimestampParsing {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an interrupted error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport {
            message: "HTTP request failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse {
            message: "JSON deserialization failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::TimestampParsing {
            message: "Timestamp parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
