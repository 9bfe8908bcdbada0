use clap::Parser;
use std::path::PathBuf;
use tracing::error;

mod config;
mod error;
mod loader;
mod logging;
mod pipeline;
mod price;
mod record;
mod sources;
mod vocab;

use crate::config::{Config, DEFAULT_IN_PERSON_CSV, DEFAULT_ONLINE_CSV, DEFAULT_OUTPUT_JSON};
use crate::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "survey_normalizer")]
#[command(about = "Normalizes community internet-access survey responses")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the online-form CSV export
    #[arg(long)]
    online: Option<PathBuf>,

    /// Path to the in-person-form CSV export
    #[arg(long = "in-person")]
    in_person: Option<PathBuf>,

    /// Path for the combined JSON output
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load()?;

    let online = cli
        .online
        .or(config.online_csv)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ONLINE_CSV));
    let in_person = cli
        .in_person
        .or(config.in_person_csv)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_IN_PERSON_CSV));
    let output = cli
        .output
        .or(config.output_json)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_JSON));

    println!("🔄 Normalizing survey responses...");
    match Pipeline::run(&online, &in_person, &output) {
        Ok(result) => {
            println!("\n📊 Normalization results:");
            println!("   Online rows: {}", result.online_rows);
            println!("   In-person rows: {}", result.in_person_rows);
            println!("   Dropped by source rules: {}", result.dropped_by_source);
            println!("   Dropped as inconsistent: {}", result.dropped_inconsistent);
            println!("   Rows written: {}", result.output_rows);
            println!("   Output file: {}", result.output_file);
            Ok(())
        }
        Err(e) => {
            error!("Normalization failed: {}", e);
            Err(e.into())
        }
    }
}
