//! HTTP client implementation for the Smart Urban Heat Map API
//!
//! This module provides the production [`SourceClient`] backed by reqwest.
//! The snapshot fetch is strict about HTTP status; the time-series fetch
//! follows the upstream convention of answering missing data with a
//! no-content status or an empty body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::app::models::TimeSeriesPayload;
use crate::app::services::converter::source::SourceClient;
use crate::config::SourceConfig;
use crate::constants::{self, query_params};
use crate::{Error, Result};

/// HTTP client for the Smart Urban Heat Map API
#[derive(Debug, Clone)]
pub struct HeatMapClient {
    http: reqwest::Client,
    base_url: String,
}

impl HeatMapClient {
    /// Create a client from source configuration
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::transport("Failed to build HTTP client", Some(e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for an API endpoint
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl SourceClient for HeatMapClient {
    async fn fetch_snapshot(&self) -> Result<String> {
        let url = self.endpoint(constants::LATEST_ENDPOINT);
        debug!("Fetching snapshot from {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::transport(
                format!("Snapshot fetch returned HTTP {}", status),
                None,
            ));
        }

        Ok(response.text().await?)
    }

    async fn fetch_timeseries(
        &self,
        station_id: &str,
        time_from: Option<&str>,
        time_to: Option<&str>,
    ) -> Result<TimeSeriesPayload> {
        let url = self.endpoint(constants::TIMESERIES_ENDPOINT);

        let mut query: Vec<(&str, &str)> = vec![(query_params::STATION_ID, station_id)];
        if let Some(from) = time_from {
            query.push((query_params::TIME_FROM, from));
        }
        if let Some(to) = time_to {
            query.push((query_params::TIME_TO, to));
        }

        debug!(
            "Fetching time series from {} for station {}",
            url, station_id
        );

        let response = self.http.get(&url).query(&query).send().await?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(TimeSeriesPayload::empty());
        }
        if !status.is_success() {
            return Err(Error::transport(
                format!(
                    "Time-series fetch for station {} returned HTTP {}",
                    station_id, status
                ),
                None,
            ));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(TimeSeriesPayload::empty());
        }

        match serde_json::from_str(&body) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    "Time-series response for station {} is not valid JSON: {}",
                    station_id, error
                );
                Ok(TimeSeriesPayload::empty())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url_and_path() {
        let config = SourceConfig::default();
        let client = HeatMapClient::new(&config).unwrap();

        assert_eq!(
            client.endpoint("latest"),
            "https://smart-urban-heat-map.ch/api/v2/latest"
        );
        assert_eq!(
            client.endpoint("timeseries"),
            "https://smart-urban-heat-map.ch/api/v2/timeseries"
        );
    }

    #[test]
    fn test_trailing_slash_in_base_url_is_normalized() {
        let config = SourceConfig {
            base_url: "https://example.org/api/".to_string(),
            ..SourceConfig::default()
        };
        let client = HeatMapClient::new(&config).unwrap();

        assert_eq!(client.endpoint("latest"), "https://example.org/api/latest");
    }

    #[test]
    fn test_client_builds_from_custom_timeout() {
        let config = SourceConfig {
            request_timeout_secs: 5,
            ..SourceConfig::default()
        };

        assert!(HeatMapClient::new(&config).is_ok());
    }
}
