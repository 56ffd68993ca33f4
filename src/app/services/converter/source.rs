//! Upstream source contract
//!
//! The conversion facade talks to the Smart Urban Heat Map API through this
//! trait, so conversions can run against the live HTTP client or any other
//! payload source.

use async_trait::async_trait;

use crate::Result;
use crate::app::models::TimeSeriesPayload;

/// Contract for fetching raw payloads from the upstream API
///
/// The two operations carry different failure policies. `fetch_snapshot` is
/// strict: a non-success response surfaces as a transport error. The
/// time-series fetch is lenient about content: a no-content response or an
/// unparseable body comes back as an empty payload, and only transport
/// failures surface as errors.
#[async_trait]
pub trait SourceClient: Send + Sync {
    /// Fetch the raw latest-snapshot payload as delivered by the API
    async fn fetch_snapshot(&self) -> Result<String>;

    /// Fetch a station's time series, optionally bounded by a time range
    async fn fetch_timeseries(
        &self,
        station_id: &str,
        time_from: Option<&str>,
        time_to: Option<&str>,
    ) -> Result<TimeSeriesPayload>;
}
