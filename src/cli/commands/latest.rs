//! Latest command implementation for the SensorThings converter CLI
//!
//! This module fetches the newest snapshot of all stations and converts it
//! into the full SensorThings entity set.

use super::shared::{ConversionStats, render_json, setup_logging, write_output_file};
use crate::Result;
use crate::app::services::converter::SensorThingsConverter;
use crate::app::services::heat_map_client::HeatMapClient;
use crate::cli::args::LatestArgs;
use std::time::Instant;
use tracing::{debug, info};

/// Latest command runner for the SensorThings converter
///
/// This function fetches the latest snapshot and converts it into Things,
/// Locations, Datastreams and Observations.
pub async fn run_latest(args: LatestArgs) -> Result<ConversionStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting snapshot conversion");
    debug!("Latest arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    let config = args.to_config();
    config.validate()?;

    info!("Fetching latest snapshot from {}", config.source.base_url);

    let client = HeatMapClient::new(&config.source)?;
    let converter = SensorThingsConverter::new(client);

    let result = converter.convert().await?;
    let rendered = render_json(&result, config.output.pretty)?;

    let mut stats = ConversionStats::from_snapshot(&result, start_time.elapsed());

    match args.resolve_output_path() {
        Some(path) => {
            let size = write_output_file(&path, &rendered)?;
            stats.output_size = Some(size);
            stats.output_file = Some(path);

            if !args.quiet {
                println!("{}", format_summary(&stats));
            }
        }
        None => {
            // Keep stdout clean so the JSON can be piped
            println!("{}", rendered);
        }
    }

    info!(
        "Snapshot conversion completed in {:.2}s",
        stats.conversion_time.as_secs_f64()
    );

    Ok(stats)
}

/// Build the human-readable conversion summary
fn format_summary(stats: &ConversionStats) -> String {
    let mut output = format!(
        "🌡️  SensorThings Snapshot Conversion\n\
         ================================\n\
         🏭 Things: {}\n\
         📍 Locations: {}\n\
         📊 Datastreams: {}\n\
         🔢 Observations: {}\n\
         ⏱️  Conversion Time: {:.2}s\n",
        stats.things,
        stats.locations,
        stats.datastreams,
        stats.observations,
        stats.conversion_time.as_secs_f64()
    );

    if let (Some(path), Some(size)) = (&stats.output_file, stats.output_size) {
        output.push_str(&format!(
            "💾 Output: {} ({})\n",
            path.display(),
            ConversionStats::format_size(size)
        ));
    }

    output
}
