//! Conversion facade implementation
//!
//! This module orchestrates the full pipeline: fetch raw payloads through a
//! [`SourceClient`], extract rows or entries, run the entity builders, and
//! assemble the collection-keyed results.

use tracing::{info, warn};

use super::source::SourceClient;
use crate::app::models::{SnapshotConversion, StationId, TimeSeriesConversion};
use crate::app::services::entity_builders::{
    DatastreamBuilder, LocationBuilder, ObservationBuilder, ThingBuilder,
    TimeSeriesObservationBuilder,
};
use crate::app::services::feature_loader::FeatureLoader;
use crate::{Error, Result};

/// Facade orchestrating both conversion paths over one upstream source
///
/// The two operations deliberately carry different failure policies:
/// - [`convert`](Self::convert) is fail-fast; any fetch or parse problem
///   propagates to the caller.
/// - [`convert_timeseries`](Self::convert_timeseries) is best-effort; apart
///   from an unusable station id, every failure degrades to an empty
///   observation list and is logged instead of raised.
#[derive(Debug)]
pub struct SensorThingsConverter<C: SourceClient> {
    client: C,
    loader: FeatureLoader,
    thing_builder: ThingBuilder,
    location_builder: LocationBuilder,
    datastream_builder: DatastreamBuilder,
    observation_builder: ObservationBuilder,
    timeseries_builder: TimeSeriesObservationBuilder,
}

impl<C: SourceClient> SensorThingsConverter<C> {
    /// Create a converter over the given upstream source
    pub fn new(client: C) -> Self {
        Self {
            client,
            loader: FeatureLoader::new(),
            thing_builder: ThingBuilder::new(),
            location_builder: LocationBuilder::new(),
            datastream_builder: DatastreamBuilder::new(),
            observation_builder: ObservationBuilder::new(),
            timeseries_builder: TimeSeriesObservationBuilder::new(),
        }
    }

    /// Convert the latest snapshot into the full entity set
    ///
    /// Fetches the snapshot, loads station rows and derives Things,
    /// Locations, Datastreams and Observations. Fails fast: any transport
    /// or parse error propagates unchanged.
    pub async fn convert(&self) -> Result<SnapshotConversion> {
        let raw = self.client.fetch_snapshot().await?;
        let loaded = self.loader.load(&raw)?;

        let mut things = Vec::with_capacity(loaded.rows.len());
        let mut locations = Vec::new();
        let mut datastreams = Vec::with_capacity(loaded.rows.len() * 2);
        let mut observations = Vec::new();

        for row in &loaded.rows {
            things.push(self.thing_builder.build(row));
            if let Some(location) = self.location_builder.build(row) {
                locations.push(location);
            }
            datastreams.extend(self.datastream_builder.build(row));
            observations.extend(self.observation_builder.build(row));
        }

        let conversion = SnapshotConversion {
            things,
            locations,
            datastreams,
            observations,
        };

        info!(
            "Snapshot conversion produced {} entities ({} things, {} locations, {} datastreams, {} observations)",
            conversion.entity_count(),
            conversion.things.len(),
            conversion.locations.len(),
            conversion.datastreams.len(),
            conversion.observations.len()
        );

        Ok(conversion)
    }

    /// Convert a station's time series into Observations
    ///
    /// An empty station id is rejected with an invalid-argument error before
    /// any fetch happens. Beyond that the operation never fails: upstream
    /// or build problems are logged and answered with an empty observation
    /// list, since absent time-series data is a normal outcome per station.
    pub async fn convert_timeseries(
        &self,
        station_id: &str,
        time_from: Option<&str>,
        time_to: Option<&str>,
    ) -> Result<TimeSeriesConversion> {
        if station_id.trim().is_empty() {
            return Err(Error::invalid_argument(
                "A non-empty stationId is required for time-series conversion",
            ));
        }

        match self.fetch_and_build(station_id, time_from, time_to).await {
            Ok(conversion) => Ok(conversion),
            Err(error) => {
                warn!(
                    "Time-series conversion for station {} failed, returning empty result: {}",
                    station_id, error
                );
                Ok(TimeSeriesConversion::empty())
            }
        }
    }

    /// Fallible inner path of the time-series conversion
    async fn fetch_and_build(
        &self,
        station_id: &str,
        time_from: Option<&str>,
        time_to: Option<&str>,
    ) -> Result<TimeSeriesConversion> {
        let payload = self
            .client
            .fetch_timeseries(station_id, time_from, time_to)
            .await?;

        let entries = payload.into_entries();
        if entries.is_empty() {
            info!("No time-series data for station {}", station_id);
            return Ok(TimeSeriesConversion::empty());
        }

        let station = StationId::Text(station_id.to_string());
        let result = self.timeseries_builder.build(&station, &entries);

        info!(
            "Time-series conversion for station {} produced {} observations from {} entries ({:.1}% converted)",
            station_id,
            result.stats.observations_built,
            result.stats.total_entries,
            result.stats.success_rate()
        );

        Ok(TimeSeriesConversion {
            observations: result.observations,
        })
    }
}
