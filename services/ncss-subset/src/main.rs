//! ncss-subset
//!
//! Subsets station observations to CSV/XML and inspects gridded coverages.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use ncss_subset::{load_config, run_grid, run_stations, Args, Command};

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Logs go to stderr; stdout carries the subset
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .json()
        .init();

    if let Err(e) = run(args) {
        error!(error = %format!("{:#}", e), "Command failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::Stations {
            dataset,
            query,
            format,
        } => {
            let config = load_config(args.config.as_deref())?;
            let stdout = std::io::stdout();
            let rows = run_stations(&dataset, &query, format, &config, stdout.lock())?;
            info!(rows, "Done");
        }
        Command::Grid {
            dataset,
            coverage,
            z,
        } => {
            let stdout = std::io::stdout();
            run_grid(&dataset, coverage.as_deref(), z, &mut stdout.lock())?;
        }
    }
    Ok(())
}
