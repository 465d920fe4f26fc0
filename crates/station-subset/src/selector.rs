//! Choosing which stations a request covers.

use tracing::debug;

use crate::collection::FeatureCollection;
use crate::config::{SubsetConfig, VariablePresence};
use crate::nearest::find_closest;
use crate::request::{SpatialSelection, SubsetRequest};
use crate::station::StationFeature;

/// Whether a station passes the variable-presence policy.
///
/// A station without observations always passes.
pub fn has_variables(feature: &StationFeature, variables: &[String], policy: VariablePresence) -> bool {
    let complete = |obs: &crate::station::Observation| variables.iter().all(|v| obs.has_variable(v));
    let observations = feature.observations();

    match policy {
        VariablePresence::Off => true,
        _ if variables.is_empty() || observations.is_empty() => true,
        VariablePresence::EveryObservation => observations.iter().all(complete),
        VariablePresence::AnyObservation => observations.iter().any(complete),
    }
}

/// Stations selected by `request`, in collection order.
///
/// Only collections of the requested feature type are considered. Within
/// each, stations failing the variable-presence policy are dropped before
/// the spatial criterion is applied; a nearest-point request therefore picks
/// the closest station that passes.
pub fn select_stations<'a>(
    collections: &'a [FeatureCollection],
    request: &SubsetRequest,
    config: &SubsetConfig,
) -> Vec<&'a StationFeature> {
    let feature_type = request.feature_type.unwrap_or(config.default_feature_type);
    let variables = request.variable_names().unwrap_or_default();
    let selection = request.spatial_selection();
    let keep = |f: &&StationFeature| has_variables(f, variables, config.variable_presence);

    let mut selected = Vec::new();
    for collection in collections.iter().filter(|c| c.feature_type() == feature_type) {
        let stations = collection.stations();
        let before = selected.len();

        match selection {
            SpatialSelection::Stations(names) => selected.extend(stations.by_names(names).filter(keep)),
            SpatialSelection::BoundingBox(bbox) => selected.extend(stations.in_bbox(*bbox).filter(keep)),
            SpatialSelection::Nearest(point) => {
                selected.extend(find_closest(stations.all().iter().filter(keep), point))
            }
            SpatialSelection::All => selected.extend(stations.all().iter().filter(keep)),
        }

        debug!(
            collection = %collection.name(),
            feature_type = %feature_type,
            selected = selected.len() - before,
            "Selected stations"
        );
    }
    selected
}
