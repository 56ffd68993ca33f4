use clap::Parser;
use sensorthings_converter::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Set up graceful shutdown handling
        let shutdown_signal = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
        };

        // Run the main command, aborting on Ctrl+C
        tokio::select! {
            result = commands::run(args) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(sensorthings_converter::Error::interrupted(
                    "Conversion interrupted by user".to_string()
                ))
            }
        }
    });

    match result {
        Ok(_stats) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("SensorThings Converter - Smart Urban Heat Map Data Converter");
    println!("============================================================");
    println!();
    println!("Convert Smart Urban Heat Map station measurements into OGC SensorThings");
    println!("API entities (Things, Locations, Datastreams, Observations).");
    println!();
    println!("USAGE:");
    println!("    sensorthings-converter <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    latest        Convert the latest snapshot into the full entity set");
    println!("    timeseries    Convert a station's time series into Observations");
    println!("    help          Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert the latest snapshot and print the entities to stdout:");
    println!("    sensorthings-converter latest");
    println!();
    println!("    # Convert the latest snapshot into the default output file:");
    println!("    sensorthings-converter latest --save");
    println!();
    println!("    # Convert one station's time series for a date range:");
    println!("    sensorthings-converter timeseries --station-id 11117 \\");
    println!("                           --time-from 2024-11-01T00:00:00Z --time-to 2024-11-05T00:00:00Z");
    println!();
    println!("    # Get help for specific commands:");
    println!("    sensorthings-converter latest --help");
    println!("    sensorthings-converter timeseries --help");
    println!();
    println!("For detailed help on any command, use:");
    println!("    sensorthings-converter <COMMAND> --help");
}
