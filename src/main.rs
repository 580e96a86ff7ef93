//! CLI entry point for the trip hotspots tool.
//!
//! Provides subcommands for ranking the busiest pickup zones and the
//! busiest zone/hour time slots found in trip-record CSV files.

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use trip_hotspots::analyzer::TripAnalyzer;
use trip_hotspots::ingest::ingest_file;
use trip_hotspots::output::{print_json, print_slot_table, print_zone_table, write_csv};
use trip_hotspots::types::HotspotReport;

#[derive(Parser)]
#[command(name = "trip_hotspots")]
#[command(about = "Ranks busiest pickup zones and time slots in trip-record CSVs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank pickup zones by total trips
    Zones {
        /// Trip-record CSV files to ingest
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<String>,

        /// Number of entries to keep; negative means all
        #[arg(short = 'k', long, default_value_t = 10)]
        top: i64,

        /// Optional CSV file to write the ranking to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Rank zone/hour slots by trips
    Slots {
        /// Trip-record CSV files to ingest
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<String>,

        /// Number of entries to keep; negative means all
        #[arg(short = 'k', long, default_value_t = 10)]
        top: i64,

        /// Optional CSV file to write the ranking to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Emit both rankings as a JSON report on stdout
    Report {
        /// Trip-record CSV files to ingest
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<String>,

        /// Number of entries to keep per ranking; negative means all
        #[arg(short = 'k', long, default_value_t = 10)]
        top: i64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Zones {
            inputs,
            top,
            output,
        } => {
            let analyzer = ingest_all(&inputs);
            let ranked = analyzer.top_zones(top);
            if let Some(path) = output {
                write_csv(&path, &ranked)?;
                info!(path = %path, rows = ranked.len(), "Zone ranking written");
            } else {
                print_zone_table(&ranked);
            }
        }
        Commands::Slots {
            inputs,
            top,
            output,
        } => {
            let analyzer = ingest_all(&inputs);
            let ranked = analyzer.top_busy_slots(top);
            if let Some(path) = output {
                write_csv(&path, &ranked)?;
                info!(path = %path, rows = ranked.len(), "Slot ranking written");
            } else {
                print_slot_table(&ranked);
            }
        }
        Commands::Report { inputs, top } => {
            let analyzer = ingest_all(&inputs);
            let report = HotspotReport {
                schema_version: 1,
                generated_at: Utc::now(),
                top_zones: analyzer.top_zones(top),
                top_slots: analyzer.top_busy_slots(top),
            };
            print_json(&report)?;
        }
    }

    Ok(())
}

/// Ingests each input file in turn into a fresh analyzer.
fn ingest_all(inputs: &[String]) -> TripAnalyzer {
    let mut analyzer = TripAnalyzer::new();
    for path in inputs {
        ingest_file(&mut analyzer, path);
    }
    info!(
        files = inputs.len(),
        zones = analyzer.distinct_zones(),
        "Ingestion complete"
    );
    analyzer
}
