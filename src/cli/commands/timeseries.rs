//! Timeseries command implementation for the SensorThings converter CLI
//!
//! This module fetches one station's measurement history and converts it
//! into SensorThings Observations.

use super::shared::{ConversionStats, render_json, setup_logging, write_output_file};
use crate::Result;
use crate::app::services::converter::SensorThingsConverter;
use crate::app::services::heat_map_client::HeatMapClient;
use crate::cli::args::TimeseriesArgs;
use std::time::Instant;
use tracing::{debug, info};

/// Timeseries command runner for the SensorThings converter
///
/// This function fetches the measurement history of a single station and
/// converts it into Observations referencing that station's datastreams.
pub async fn run_timeseries(args: TimeseriesArgs) -> Result<ConversionStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting time-series conversion");
    debug!("Timeseries arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    let config = args.to_config();
    config.validate()?;

    info!(
        "Fetching time series for station {} from {}",
        args.station_id, config.source.base_url
    );

    let client = HeatMapClient::new(&config.source)?;
    let converter = SensorThingsConverter::new(client);

    let result = converter
        .convert_timeseries(
            &args.station_id,
            args.time_from.as_deref(),
            args.time_to.as_deref(),
        )
        .await?;
    let rendered = render_json(&result, config.output.pretty)?;

    let mut stats = ConversionStats::from_timeseries(&result, start_time.elapsed());

    match args.resolve_output_path() {
        Some(path) => {
            let size = write_output_file(&path, &rendered)?;
            stats.output_size = Some(size);
            stats.output_file = Some(path);

            if !args.quiet {
                println!("{}", format_summary(&args, &stats));
            }
        }
        None => {
            // Keep stdout clean so the JSON can be piped
            println!("{}", rendered);
        }
    }

    info!(
        "Time-series conversion completed in {:.2}s",
        stats.conversion_time.as_secs_f64()
    );

    Ok(stats)
}

/// Build the human-readable conversion summary
fn format_summary(args: &TimeseriesArgs, stats: &ConversionStats) -> String {
    let mut output = format!(
        "📈 SensorThings Time-Series Conversion\n\
         ================================\n\
         🏭 Station: {}\n",
        args.station_id
    );

    if args.time_from.is_some() || args.time_to.is_some() {
        output.push_str(&format!(
            "🗓️  Range: {} to {}\n",
            args.time_from.as_deref().unwrap_or("start of record"),
            args.time_to.as_deref().unwrap_or("now")
        ));
    }

    output.push_str(&format!(
        "🔢 Observations: {}\n\
         ⏱️  Conversion Time: {:.2}s\n",
        stats.observations,
        stats.conversion_time.as_secs_f64()
    ));

    if let (Some(path), Some(size)) = (&stats.output_file, stats.output_size) {
        output.push_str(&format!(
            "💾 Output: {} ({})\n",
            path.display(),
            ConversionStats::format_size(size)
        ));
    }

    output
}
