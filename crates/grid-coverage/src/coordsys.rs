//! Coordinate systems and dataset-wide deduplication of their parts.
//!
//! Several coordinate systems commonly share axes and transforms. The
//! dataset exposes each name once: scanning coordinate systems in order,
//! the first occurrence of a name wins and later ones are skipped even if
//! their content differs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::{CoordAxis, RawAxis};
use crate::error::Result;
use crate::transform::{CoordTransform, RawTransform};

/// A coordinate system as the source dataset declares it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCoordSys {
    pub name: String,
    #[serde(default)]
    pub transforms: Vec<RawTransform>,
    pub axes: Vec<RawAxis>,
}

/// A coordinate system as exposed by the coverage dataset: names only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCoordSys {
    pub name: String,
    pub transform_names: Vec<String>,
    pub axis_names: Vec<String>,
}

impl GridCoordSys {
    pub fn from_raw(raw: &RawCoordSys) -> Self {
        Self {
            name: raw.name.clone(),
            transform_names: raw.transforms.iter().map(|t| t.name.clone()).collect(),
            axis_names: raw.axes.iter().map(|a| a.name.clone()).collect(),
        }
    }
}

/// Every distinct transform across the coordinate systems, first one wins.
pub fn collect_transforms(coord_systems: &[RawCoordSys]) -> Vec<CoordTransform> {
    let mut seen = HashSet::new();
    let mut transforms = Vec::new();

    for transform in coord_systems.iter().flat_map(|cs| &cs.transforms) {
        if seen.insert(transform.name.as_str()) {
            transforms.push(CoordTransform::from_raw(transform));
        } else {
            debug!(transform = %transform.name, "Skipping duplicate coordinate transform");
        }
    }
    transforms
}

/// Every distinct axis across the coordinate systems, first one wins.
pub fn collect_axes(coord_systems: &[RawCoordSys]) -> Result<Vec<CoordAxis>> {
    let mut seen = HashSet::new();
    let mut axes = Vec::new();

    for axis in coord_systems.iter().flat_map(|cs| &cs.axes) {
        if seen.insert(axis.name.as_str()) {
            axes.push(CoordAxis::from_raw(axis)?);
        } else {
            debug!(axis = %axis.name, "Skipping duplicate coordinate axis");
        }
    }
    Ok(axes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisType;

    fn coord_sys(name: &str, axes: Vec<RawAxis>, transforms: Vec<RawTransform>) -> RawCoordSys {
        RawCoordSys {
            name: name.to_string(),
            transforms,
            axes,
        }
    }

    #[test]
    fn test_shared_axes_listed_once() {
        let time = RawAxis::points("time", AxisType::Time, vec![0.0, 3.0, 6.0]);
        let lat = RawAxis::points("lat", AxisType::Lat, vec![10.0, 20.0]);
        let lon = RawAxis::points("lon", AxisType::Lon, vec![100.0, 110.0]);
        let level = RawAxis::points("isobaric", AxisType::Pressure, vec![850.0, 500.0]);

        let systems = vec![
            coord_sys("time lat lon", vec![time.clone(), lat.clone(), lon.clone()], vec![]),
            coord_sys("time isobaric lat lon", vec![time, level, lat, lon], vec![]),
        ];

        let names: Vec<String> = collect_axes(&systems)
            .unwrap()
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        assert_eq!(names, vec!["time", "lat", "lon", "isobaric"]);
    }

    #[test]
    fn test_first_occurrence_wins_on_conflict() {
        let first = RawAxis::points("time", AxisType::Time, vec![0.0, 1.0]);
        let second = RawAxis::points("time", AxisType::Time, vec![5.0, 7.0, 20.0]);
        let systems = vec![
            coord_sys("a", vec![first], vec![]),
            coord_sys("b", vec![second], vec![]),
        ];

        let axes = collect_axes(&systems).unwrap();
        assert_eq!(axes.len(), 1);
        assert_eq!(axes[0].n_values(), 2);
        assert_eq!(axes[0].start_value(), 0.0);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let systems = vec![coord_sys(
            "a",
            vec![
                RawAxis::points("Time", AxisType::Time, vec![0.0]),
                RawAxis::points("time", AxisType::Time, vec![0.0]),
            ],
            vec![],
        )];
        assert_eq!(collect_axes(&systems).unwrap().len(), 2);
    }

    #[test]
    fn test_transforms_deduplicated() {
        let proj = RawTransform::projection("LambertConformal_Projection", vec![]);
        let systems = vec![
            coord_sys("a", vec![], vec![proj.clone()]),
            coord_sys("b", vec![], vec![proj, RawTransform::vertical("sigma", vec![])]),
        ];

        let transforms = collect_transforms(&systems);
        let names: Vec<&str> = transforms.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["LambertConformal_Projection", "sigma"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(collect_transforms(&[]).is_empty());
        assert!(collect_axes(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_grid_coord_sys_names() {
        let raw = coord_sys(
            "time lat lon",
            vec![RawAxis::points("time", AxisType::Time, vec![0.0])],
            vec![RawTransform::projection("latlon", vec![])],
        );
        let cs = GridCoordSys::from_raw(&raw);
        assert_eq!(cs.axis_names, vec!["time"]);
        assert_eq!(cs.transform_names, vec!["latlon"]);
    }
}
