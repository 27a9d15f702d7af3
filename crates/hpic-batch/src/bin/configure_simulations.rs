// ─────────────────────────────────────────────────────────────────────
// SCPN hPIC Batch — configure-simulations
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Generate one hPIC job per row of a SOLPS CSV file.
//!
//! Usage: `configure-simulations <SOLPS_CSV_DATAFILE> [--config FILE] [--output-root DIR]`

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

use hpic_batch::orchestrator::{configure_from_file, OutputLayout};
use hpic_types::config::HpicConfig;

const USAGE: &str = "usage: configure-simulations <SOLPS_CSV_DATAFILE>";

#[derive(Parser, Debug)]
#[command(name = "configure-simulations")]
#[command(about = "Write hPIC job directories and a driver script for a SOLPS dataset")]
struct Args {
    /// SOLPS CSV data file, one row per position from the strike point
    data_file: Option<PathBuf>,

    /// JSON run configuration (discretization, cadence, mesh, species)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory that receives hpic_results/ and scripts/
    #[arg(long = "output-root", default_value = ".")]
    output_root: PathBuf,

    /// Field delimiter of the data file
    #[arg(long, default_value_t = ',')]
    delimiter: char,
}

fn main() {
    let args = Args::parse();

    let Some(data_file) = args.data_file else {
        println!("{USAGE}");
        return;
    };

    hpic_batch::init_logging();

    if !args.delimiter.is_ascii() {
        error!("Delimiter must be a single ASCII character, got {:?}", args.delimiter);
        process::exit(1);
    }

    let config = match &args.config {
        Some(path) => match HpicConfig::from_file(path) {
            Ok(cfg) => {
                info!("Loaded run configuration from {}", path.display());
                cfg
            }
            Err(e) => {
                error!("Failed to load {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => HpicConfig::default(),
    };

    let layout = OutputLayout::with_root(args.output_root);
    match configure_from_file(&data_file, &config, &layout, args.delimiter as u8) {
        Ok(summary) => {
            info!(
                "Dataset '{}': {} simulations, run with {}",
                summary.data_set_label,
                summary.jobs.len(),
                summary.script_path.display()
            );
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
