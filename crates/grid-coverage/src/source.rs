//! The gridded-dataset seam.
//!
//! [`GridSource`] is what the coverage adapter reads from. Production
//! backends wrap a real file reader; [`InMemoryGridSource`] holds everything
//! in memory and loads from a JSON description, which is what the CLI and
//! the tests use.

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::axis::DataType;
use crate::coordsys::RawCoordSys;
use crate::error::{CoverageError, Result};

/// A data variable as the source dataset declares it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGrid {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub data_type: DataType,
    pub coord_sys: String,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub description: String,
}

/// Selection along one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliceRange {
    /// The whole dimension.
    #[default]
    All,
    /// A single index; the dimension is dropped from the result.
    Index(usize),
}

impl SliceRange {
    fn resolve(self, dim: &'static str, len: usize) -> Result<std::ops::Range<usize>> {
        match self {
            SliceRange::All => Ok(0..len),
            SliceRange::Index(index) if index < len => Ok(index..index + 1),
            SliceRange::Index(index) => Err(CoverageError::SliceOutOfBounds { dim, index, len }),
        }
    }

    fn keeps_dim(self) -> bool {
        matches!(self, SliceRange::All)
    }
}

/// A (time, z, y, x) slice selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceRequest {
    pub time: SliceRange,
    pub z: SliceRange,
    pub y: SliceRange,
    pub x: SliceRange,
}

impl SliceRequest {
    /// Every dimension in full.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_time(mut self, index: usize) -> Self {
        self.time = SliceRange::Index(index);
        self
    }

    pub fn with_z(mut self, index: usize) -> Self {
        self.z = SliceRange::Index(index);
        self
    }
}

/// An n-dimensional array of values in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct GridArray {
    pub shape: Vec<usize>,
    pub data: Vec<f64>,
}

impl GridArray {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }
}

/// Read access to a gridded dataset.
pub trait GridSource {
    /// Location of the dataset (path or URL).
    fn location(&self) -> &str;

    fn grids(&self) -> &[RawGrid];

    fn coord_systems(&self) -> &[RawCoordSys];

    fn global_attributes(&self) -> &[Attribute];

    /// Read a slice of a grid's data.
    fn read_slice(&self, grid: &str, request: &SliceRequest) -> Result<GridArray>;
}

/// A grid's values with a fixed (time, z, y, x) shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredArray {
    pub grid: String,
    pub shape: [usize; 4],
    pub data: Vec<f64>,
}

impl StoredArray {
    fn validate(&self) -> Result<()> {
        let expected: usize = self.shape.iter().product();
        if expected != self.data.len() {
            return Err(CoverageError::read_failed(format!(
                "grid '{}' declares shape {:?} ({} values) but stores {}",
                self.grid,
                self.shape,
                expected,
                self.data.len()
            )));
        }
        Ok(())
    }

    fn slice(&self, request: &SliceRequest) -> Result<GridArray> {
        self.validate()?;
        let [nt, nz, ny, nx] = self.shape;
        let t_range = request.time.resolve("time", nt)?;
        let z_range = request.z.resolve("z", nz)?;
        let y_range = request.y.resolve("y", ny)?;
        let x_range = request.x.resolve("x", nx)?;

        let shape: Vec<usize> = [
            (request.time, t_range.len()),
            (request.z, z_range.len()),
            (request.y, y_range.len()),
            (request.x, x_range.len()),
        ]
        .iter()
        .filter(|(range, _)| range.keeps_dim())
        .map(|(_, len)| *len)
        .collect();

        let mut data = Vec::with_capacity(shape.iter().product());
        for t in t_range {
            for z in z_range.clone() {
                for y in y_range.clone() {
                    let row = ((t * nz + z) * ny + y) * nx;
                    data.extend_from_slice(&self.data[row + x_range.start..row + x_range.end]);
                }
            }
        }

        Ok(GridArray { shape, data })
    }
}

/// A fully in-memory dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InMemoryGridSource {
    pub location: String,
    #[serde(default)]
    pub global_attributes: Vec<Attribute>,
    #[serde(default)]
    pub coord_systems: Vec<RawCoordSys>,
    #[serde(default)]
    pub grids: Vec<RawGrid>,
    #[serde(default)]
    pub arrays: Vec<StoredArray>,
}

impl InMemoryGridSource {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Default::default()
        }
    }

    /// Parse a JSON dataset description.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_coord_sys(mut self, coord_sys: RawCoordSys) -> Self {
        self.coord_systems.push(coord_sys);
        self
    }

    pub fn with_grid(mut self, grid: RawGrid) -> Self {
        self.grids.push(grid);
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.global_attributes.push(attribute);
        self
    }

    /// Store values for a grid with a (time, z, y, x) shape.
    pub fn with_array(mut self, grid: impl Into<String>, shape: [usize; 4], data: Vec<f64>) -> Self {
        self.arrays.push(StoredArray {
            grid: grid.into(),
            shape,
            data,
        });
        self
    }
}

impl GridSource for InMemoryGridSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn grids(&self) -> &[RawGrid] {
        &self.grids
    }

    fn coord_systems(&self) -> &[RawCoordSys] {
        &self.coord_systems
    }

    fn global_attributes(&self) -> &[Attribute] {
        &self.global_attributes
    }

    fn read_slice(&self, grid: &str, request: &SliceRequest) -> Result<GridArray> {
        self.arrays
            .iter()
            .find(|array| array.grid == grid)
            .ok_or_else(|| CoverageError::read_failed(format!("no data stored for grid '{}'", grid)))?
            .slice(request)
    }
}
