//! Subcommand implementations. Output goes to the given writer.

use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use grid_coverage::{GridCoverageDataset, GridSubset, InMemoryGridSource};
use ncss_common::SubsetError;
use station_subset::{write_station_subset, OutputFormat, StationDataset, SubsetConfig, SubsetRequest};
use tracing::info;

/// Load configuration from a YAML file, or from the environment.
pub fn load_config(path: Option<&Path>) -> Result<SubsetConfig> {
    let config = match path {
        Some(path) => {
            let yaml = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {:?}", path))?;
            SubsetConfig::from_yaml_str(&yaml).with_context(|| format!("Failed to parse config: {:?}", path))?
        }
        None => SubsetConfig::from_env(),
    };
    config.validate().map_err(|e| anyhow!("Invalid configuration: {}", e))?;
    Ok(config)
}

/// Run a station subset and write it to `out`. Returns the row count.
pub fn run_stations<W: Write>(
    dataset: &Path,
    query: &str,
    format: OutputFormat,
    config: &SubsetConfig,
    out: W,
) -> Result<usize> {
    let json = std::fs::read_to_string(dataset)
        .with_context(|| format!("Failed to read station dataset: {:?}", dataset))?;
    let stations = StationDataset::from_json(&json)?;
    let request = SubsetRequest::from_query(query)?;

    info!(dataset = ?dataset, query = %query, format = %format, "Subsetting stations");

    let mut writer = format.writer(out, config.coord_decimals);
    let rows = write_station_subset(&stations, &request, config, &mut writer)?;
    Ok(rows)
}

/// Print the axis table of a grid dataset and optionally read one coverage.
pub fn run_grid<W: Write>(dataset: &Path, coverage: Option<&str>, z: Option<f64>, out: &mut W) -> Result<()> {
    let json = std::fs::read_to_string(dataset)
        .with_context(|| format!("Failed to read grid dataset: {:?}", dataset))?;
    let source = InMemoryGridSource::from_json(&json).map_err(SubsetError::from)?;
    let grid = GridCoverageDataset::from_source(source).map_err(SubsetError::from)?;

    writeln!(out, "dataset {}", grid.name())?;
    writeln!(
        out,
        "{:<24} {:<10} {:>7} {:>6} {:>14} {:>14}",
        "axis", "type", "spacing", "n", "start", "end"
    )?;
    for axis in grid.coord_axes() {
        writeln!(
            out,
            "{:<24} {:<10} {:>7} {:>6} {:>14} {:>14}",
            axis.name(),
            axis.axis_type().as_str(),
            axis.spacing().code(),
            axis.n_values(),
            axis.start_value(),
            axis.end_value()
        )?;
    }
    for coverage in grid.grids() {
        writeln!(out, "coverage {} [{}] on {}", coverage.name, coverage.units, coverage.coord_sys_name)?;
    }

    let Some(name) = coverage else {
        return Ok(());
    };
    let coverage = grid
        .find_coverage(name)
        .ok_or_else(|| SubsetError::NotFound(format!("coverage '{}'", name)))?;

    let subset = match z {
        Some(level) => GridSubset::new().with_vertical(level),
        None => GridSubset::new(),
    };
    let array = grid.read_data(coverage, &subset).map_err(SubsetError::from)?;
    writeln!(out, "read {} shape {:?} ({} values)", coverage.name, array.shape, array.len())?;
    Ok(())
}
