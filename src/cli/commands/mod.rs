//! Command implementations for the SensorThings converter CLI
//!
//! This module contains the main command execution logic and error handling
//! for the CLI interface. Each command is implemented in its own module for
//! better organization and maintainability.

pub mod latest;
pub mod shared;
pub mod timeseries;

// Re-export the main types and functions for backward compatibility
pub use shared::ConversionStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the SensorThings converter
///
/// This function dispatches to the appropriate subcommand handler based on CLI args.
/// Each command is implemented in its own module:
/// - `latest`: Snapshot conversion into the full entity set
/// - `timeseries`: Per-station conversion into Observations
pub async fn run(args: Args) -> Result<ConversionStats> {
    match args.get_command() {
        Commands::Latest(latest_args) => latest::run_latest(latest_args).await,
        Commands::Timeseries(timeseries_args) => timeseries::run_timeseries(timeseries_args).await,
    }
}
