//! Coverage view over a gridded dataset.

use serde::Serialize;
use tracing::{debug, info};

use crate::attribute::Attribute;
use crate::axis::{CoordAxis, DataType};
use crate::coordsys::{collect_axes, collect_transforms, GridCoordSys};
use crate::error::{CoverageError, Result};
use crate::source::{GridArray, GridSource, RawGrid, SliceRequest};
use crate::subset::{GridSubset, VERTICAL};
use crate::transform::CoordTransform;

/// One data variable of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCoverage {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub data_type: DataType,
    pub coord_sys_name: String,
    pub units: String,
    pub description: String,
}

impl GridCoverage {
    fn from_raw(raw: &RawGrid) -> Self {
        Self {
            name: raw.name.clone(),
            attributes: raw.attributes.clone(),
            data_type: raw.data_type,
            coord_sys_name: raw.coord_sys.clone(),
            units: raw.units.clone(),
            description: raw.description.clone(),
        }
    }
}

/// Uniform coverage view built once from a [`GridSource`].
///
/// Everything except the data arrays is materialized at construction; the
/// view is immutable afterwards and only `read_data` touches the source.
#[derive(Debug)]
pub struct GridCoverageDataset<S> {
    source: S,
    coverages: Vec<GridCoverage>,
    coord_systems: Vec<GridCoordSys>,
    transforms: Vec<CoordTransform>,
    axes: Vec<CoordAxis>,
}

impl<S: GridSource> GridCoverageDataset<S> {
    /// Adapt a source dataset.
    ///
    /// Fails if a grid names an undeclared coordinate system or an axis
    /// cannot be represented.
    pub fn from_source(source: S) -> Result<Self> {
        let raw_systems = source.coord_systems();

        for grid in source.grids() {
            if !raw_systems.iter().any(|cs| cs.name == grid.coord_sys) {
                return Err(CoverageError::UnknownCoordSys {
                    grid: grid.name.clone(),
                    coord_sys: grid.coord_sys.clone(),
                });
            }
        }

        let coverages: Vec<GridCoverage> = source.grids().iter().map(GridCoverage::from_raw).collect();
        let coord_systems = raw_systems.iter().map(GridCoordSys::from_raw).collect();
        let transforms = collect_transforms(raw_systems);
        let axes = collect_axes(raw_systems)?;

        info!(
            location = %source.location(),
            coverages = coverages.len(),
            coord_systems = raw_systems.len(),
            transforms = transforms.len(),
            axes = axes.len(),
            "Adapted grid dataset"
        );

        Ok(Self {
            source,
            coverages,
            coord_systems,
            transforms,
            axes,
        })
    }

    /// Dataset location.
    pub fn name(&self) -> &str {
        self.source.location()
    }

    /// Coverages in declaration order.
    pub fn grids(&self) -> &[GridCoverage] {
        &self.coverages
    }

    /// Case-insensitive lookup by coverage name.
    pub fn find_coverage(&self, name: &str) -> Option<&GridCoverage> {
        self.coverages
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn coord_sys(&self) -> &[GridCoordSys] {
        &self.coord_systems
    }

    pub fn coord_transforms(&self) -> &[CoordTransform] {
        &self.transforms
    }

    pub fn coord_axes(&self) -> &[CoordAxis] {
        &self.axes
    }

    pub fn global_attributes(&self) -> &[Attribute] {
        self.source.global_attributes()
    }

    /// Dataset-wide axis by exact name.
    pub fn find_axis(&self, name: &str) -> Option<&CoordAxis> {
        self.axes.iter().find(|a| a.name() == name)
    }

    /// The vertical axis of a coverage's coordinate system, if it has one.
    pub fn vertical_axis(&self, coverage: &GridCoverage) -> Option<&CoordAxis> {
        self.coord_systems
            .iter()
            .find(|cs| cs.name == coverage.coord_sys_name)?
            .axis_names
            .iter()
            .filter_map(|name| self.find_axis(name))
            .find(|axis| axis.axis_type().is_vertical())
    }

    /// Translate subset parameters into a slice selection.
    pub fn slice_request(&self, coverage: &GridCoverage, subset: &GridSubset) -> Result<SliceRequest> {
        for key in subset.keys().filter(|k| *k != VERTICAL) {
            debug!(coverage = %coverage.name, key = %key, "Ignoring unsupported subset entry");
        }

        let mut request = SliceRequest::all();
        if let Some(level) = subset.vertical_value()? {
            let axis = self
                .vertical_axis(coverage)
                .ok_or_else(|| CoverageError::NoVerticalAxis(coverage.name.clone()))?;
            let index = axis.find_index_for_value(level);
            debug!(
                coverage = %coverage.name,
                axis = %axis.name(),
                level,
                index,
                "Resolved vertical level"
            );
            request = request.with_z(index);
        }
        Ok(request)
    }

    /// Read the coverage's data for the subset.
    pub fn read_data(&self, coverage: &GridCoverage, subset: &GridSubset) -> Result<GridArray> {
        let request = self.slice_request(coverage, subset)?;
        self.source.read_slice(&coverage.name, &request)
    }

    /// Unwrap the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }
}
