//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use station_subset::OutputFormat;

/// NetCDF subset command-line tool
#[derive(Parser, Debug)]
#[command(name = "ncss-subset")]
#[command(about = "Inspect gridded coverages and subset station observations")]
pub struct Args {
    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// YAML configuration file; environment variables are used when absent
    #[arg(long, env = "NCSS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Subset a station dataset and write the rows to stdout
    Stations {
        /// Station dataset (JSON)
        #[arg(long)]
        dataset: PathBuf,

        /// Query string, e.g. "stns=KDEN,KBJC&time=present&var=air_temperature"
        #[arg(long, default_value = "")]
        query: String,

        /// Output format (csv or xml)
        #[arg(long, default_value = "csv")]
        format: OutputFormat,
    },

    /// Describe a gridded dataset and optionally read one level of a coverage
    Grid {
        /// Grid dataset (JSON)
        #[arg(long)]
        dataset: PathBuf,

        /// Coverage to read
        #[arg(long)]
        coverage: Option<String>,

        /// Vertical coordinate of the level to read
        #[arg(long, requires = "coverage", allow_hyphen_values = true)]
        z: Option<f64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stations_command() {
        let args = Args::try_parse_from([
            "ncss-subset",
            "stations",
            "--dataset",
            "metar.json",
            "--query",
            "stns=KDEN",
            "--format",
            "xml",
        ])
        .unwrap();
        match args.command {
            Command::Stations { query, format, .. } => {
                assert_eq!(query, "stns=KDEN");
                assert_eq!(format, OutputFormat::Xml);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_z_requires_coverage() {
        let result = Args::try_parse_from(["ncss-subset", "grid", "--dataset", "gfs.json", "--z", "850"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_z() {
        let args = Args::try_parse_from([
            "ncss-subset",
            "grid",
            "--dataset",
            "ocean.json",
            "--coverage",
            "temp",
            "--z",
            "-10",
        ])
        .unwrap();
        assert!(matches!(args.command, Command::Grid { z: Some(z), .. } if z == -10.0));
    }
}
