//! Station subset pipeline: select, restrict in time, write.

use ncss_common::{SubsetError, SubsetResult};
use tracing::{info, warn};

use crate::collection::StationDataset;
use crate::config::SubsetConfig;
use crate::request::SubsetRequest;
use crate::selector::select_stations;
use crate::station::Observation;
use crate::temporal::FeatureView;
use crate::writer::{Column, HeaderState, Row, StationWriter};

/// Write every (station, observation) row the request selects.
///
/// The header goes out with the first row; its columns are the requested
/// variables (or all dataset variables) present in that first observation.
/// Returns the number of rows written. Writing nothing is an error, and the
/// writer is left unfinished in that case.
pub fn write_station_subset<W: StationWriter + ?Sized>(
    dataset: &StationDataset,
    request: &SubsetRequest,
    config: &SubsetConfig,
    writer: &mut W,
) -> SubsetResult<usize> {
    let stations = select_stations(&dataset.collections, request, config);
    let wanted = wanted_variables(dataset, request);

    let mut header = HeaderState::NotStarted;
    let mut columns: Vec<Column> = Vec::new();
    let mut count = 0usize;

    for feature in &stations {
        let view = FeatureView::of(feature).restrict(request.time_range.as_ref(), request.time);

        for observation in view.observations {
            if header == HeaderState::NotStarted {
                columns = header_columns(dataset, &wanted, observation);
                writer.write_header(&columns)?;
                header = HeaderState::HeaderWritten;
            }

            writer.write_row(&Row {
                station: view.station,
                observation,
                columns: &columns,
            })?;
            count += 1;
        }
    }

    if count == 0 {
        warn!(stations = stations.len(), "No features are in the requested subset");
        return Err(SubsetError::EmptySubset);
    }

    writer.finish()?;
    info!(stations = stations.len(), rows = count, "Wrote station subset");
    Ok(count)
}

/// Requested variable names, defaulting to every variable of the dataset.
fn wanted_variables<'a>(dataset: &'a StationDataset, request: &'a SubsetRequest) -> Vec<&'a str> {
    match request.variable_names() {
        Some(names) => names.iter().map(String::as_str).collect(),
        None => dataset.variables.iter().map(|v| v.name.as_str()).collect(),
    }
}

fn header_columns(dataset: &StationDataset, wanted: &[&str], first: &Observation) -> Vec<Column> {
    wanted
        .iter()
        .filter(|name| first.has_variable(name))
        .map(|name| Column::new(*name, dataset.units_of(name)))
        .collect()
}
