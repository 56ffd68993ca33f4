//! Configuration management and validation.
//!
//! Provides configuration structures for the upstream API connection and
//! output rendering, with defaults matching the public Smart Urban Heat Map
//! deployment.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::{Error, Result};

/// Upstream API connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the Smart Urban Heat Map API
    pub base_url: String,

    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Output rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output instead of the compact form
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Global configuration for the SensorThings converter
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Upstream API connection settings
    pub source: SourceConfig,

    /// Output rendering settings
    pub output: OutputConfig,
}

impl Config {
    /// Create configuration with a custom base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.source.base_url = base_url.into();
        self
    }

    /// Create configuration with a custom request timeout
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.source.request_timeout_secs = secs;
        self
    }

    /// Disable pretty-printing for machine-oriented output
    pub fn with_compact_output(mut self) -> Self {
        self.output.pretty = false;
        self
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.source.base_url.trim().is_empty() {
            return Err(Error::configuration("Base URL cannot be empty".to_string()));
        }

        if !self.source.base_url.starts_with("http://")
            && !self.source.base_url.starts_with("https://")
        {
            return Err(Error::configuration(format!(
                "Base URL must start with http:// or https://: {}",
                self.source.base_url
            )));
        }

        if self.source.request_timeout_secs == 0 {
            return Err(Error::configuration(
                "Request timeout must be greater than 0 seconds".to_string(),
            ));
        }

        if self.source.request_timeout_secs > 3600 {
            return Err(Error::configuration(
                "Request timeout cannot exceed 3600 seconds".to_string(),
            ));
        }

        Ok(())
    }
}
