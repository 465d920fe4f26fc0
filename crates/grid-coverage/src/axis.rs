//! Coordinate axis adapter.
//!
//! A [`RawAxis`] is the 1-D axis exactly as the source dataset presents it:
//! coordinate values plus optional per-sample bounds. [`CoordAxis`] is the
//! normalized view exposed by the coverage dataset. Construction classifies
//! the axis (see [`Spacing`]) and keeps only the representation that spacing
//! implies, so a `CoordAxis` never carries both points and edges.

use serde::{Deserialize, Serialize};

use crate::error::{CoverageError, Result};
use crate::spacing::{AxisTraits, Spacing};

/// Relative tolerance for step and edge comparisons.
const SPACING_TOLERANCE: f64 = 1.0e-5;

/// Semantic kind of a coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisType {
    Time,
    RunTime,
    Ensemble,
    GeoZ,
    Height,
    Pressure,
    GeoY,
    GeoX,
    Lat,
    Lon,
}

impl AxisType {
    /// Vertical axes are the ones a `Z` subset resolves against.
    pub fn is_vertical(&self) -> bool {
        matches!(self, AxisType::GeoZ | AxisType::Height | AxisType::Pressure)
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(
            self,
            AxisType::GeoX | AxisType::GeoY | AxisType::Lat | AxisType::Lon
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AxisType::Time => "Time",
            AxisType::RunTime => "RunTime",
            AxisType::Ensemble => "Ensemble",
            AxisType::GeoZ => "GeoZ",
            AxisType::Height => "Height",
            AxisType::Pressure => "Pressure",
            AxisType::GeoY => "GeoY",
            AxisType::GeoX => "GeoX",
            AxisType::Lat => "Lat",
            AxisType::Lon => "Lon",
        }
    }
}

/// Element type of a variable or axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Byte,
    Short,
    Int,
    Long,
    Float,
    #[default]
    Double,
}

/// Per-sample interval bounds, as two parallel arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

/// A 1-D coordinate axis as delivered by the source dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAxis {
    pub name: String,
    pub axis_type: AxisType,
    #[serde(default)]
    pub data_type: DataType,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub description: String,
    pub values: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<AxisBounds>,
}

impl RawAxis {
    /// A point axis with no bounds.
    pub fn points(name: impl Into<String>, axis_type: AxisType, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            axis_type,
            data_type: DataType::Double,
            units: String::new(),
            description: String::new(),
            values,
            bounds: None,
        }
    }

    /// Attach interval bounds.
    pub fn with_bounds(mut self, lower: Vec<f64>, upper: Vec<f64>) -> Self {
        self.bounds = Some(AxisBounds { lower, upper });
        self
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check the axis is internally consistent.
    pub fn validate(&self) -> Result<()> {
        if self.values.is_empty() {
            return Err(CoverageError::invalid_axis(&self.name, "axis has no values"));
        }
        if self.values.iter().any(|v| !v.is_finite()) {
            return Err(CoverageError::invalid_axis(
                &self.name,
                "axis values must be finite",
            ));
        }
        if let Some(bounds) = &self.bounds {
            if bounds.lower.len() != self.len() || bounds.upper.len() != self.len() {
                return Err(CoverageError::invalid_axis(
                    &self.name,
                    format!(
                        "expected {} bounds, got {} lower and {} upper",
                        self.len(),
                        bounds.lower.len(),
                        bounds.upper.len()
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Uniform step, and bounds (if any) sitting halfway between samples.
    pub fn is_regular(&self) -> bool {
        let n = self.len();
        if n < 2 {
            return n == 1 && self.bounds.is_none();
        }

        let step = self.values[1] - self.values[0];
        if step == 0.0 {
            return false;
        }
        let uniform = self
            .values
            .windows(2)
            .all(|w| nearly_equal(w[1] - w[0], step, step));
        if !uniform {
            return false;
        }

        match &self.bounds {
            None => true,
            Some(bounds) => self.values.iter().enumerate().all(|(i, v)| {
                nearly_equal(bounds.lower[i], v - step / 2.0, step)
                    && nearly_equal(bounds.upper[i], v + step / 2.0, step)
            }),
        }
    }

    pub fn is_interval(&self) -> bool {
        self.bounds.is_some()
    }

    /// Each cell's upper bound equals the next cell's lower bound.
    pub fn is_contiguous(&self) -> bool {
        match &self.bounds {
            None => true,
            Some(bounds) => {
                let scale = typical_width(bounds);
                (0..self.len().saturating_sub(1))
                    .all(|i| nearly_equal(bounds.upper[i], bounds.lower[i + 1], scale))
            }
        }
    }

    /// The characteristics fed to [`Spacing::classify`].
    pub fn traits(&self) -> AxisTraits {
        AxisTraits {
            regular: self.is_regular(),
            interval: self.is_interval(),
            contiguous: self.is_contiguous(),
        }
    }
}

/// Stored coordinate layout. Exactly one representation per axis.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisValues {
    /// Evenly spaced from `start` to `end`.
    Regular { start: f64, end: f64 },
    /// One value per sample.
    Points(Vec<f64>),
    /// n + 1 cell edges.
    Edges(Vec<f64>),
    /// 2n values: lower₀, upper₀, lower₁, upper₁, …
    Bounds(Vec<f64>),
}

impl AxisValues {
    pub fn spacing(&self) -> Spacing {
        match self {
            AxisValues::Regular { .. } => Spacing::Regular,
            AxisValues::Points(_) => Spacing::IrregularPoint,
            AxisValues::Edges(_) => Spacing::ContiguousInterval,
            AxisValues::Bounds(_) => Spacing::DiscontiguousInterval,
        }
    }
}

/// Normalized coordinate axis.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordAxis {
    name: String,
    axis_type: AxisType,
    data_type: DataType,
    units: String,
    description: String,
    n_values: usize,
    start_value: f64,
    end_value: f64,
    values: AxisValues,
}

impl CoordAxis {
    /// Classify a raw axis and keep the layout its spacing implies.
    pub fn from_raw(raw: &RawAxis) -> Result<Self> {
        raw.validate()?;

        let n = raw.len();
        let spacing = Spacing::classify(&raw.traits());
        let values = match (spacing, &raw.bounds) {
            (Spacing::Regular, _) => AxisValues::Regular {
                start: raw.values[0],
                end: raw.values[n - 1],
            },
            (Spacing::IrregularPoint, _) | (_, None) => AxisValues::Points(raw.values.clone()),
            (Spacing::ContiguousInterval, Some(bounds)) => {
                let mut edges = bounds.lower.clone();
                edges.push(bounds.upper[n - 1]);
                AxisValues::Edges(edges)
            }
            (Spacing::DiscontiguousInterval, Some(bounds)) => AxisValues::Bounds(
                bounds
                    .lower
                    .iter()
                    .zip(&bounds.upper)
                    .flat_map(|(lo, hi)| [*lo, *hi])
                    .collect(),
            ),
        };

        Ok(Self {
            name: raw.name.clone(),
            axis_type: raw.axis_type,
            data_type: raw.data_type,
            units: raw.units.clone(),
            description: raw.description.clone(),
            n_values: n,
            start_value: raw.values[0],
            end_value: raw.values[n - 1],
            values,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn axis_type(&self) -> AxisType {
        self.axis_type
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of samples (cells) along the axis.
    pub fn n_values(&self) -> usize {
        self.n_values
    }

    /// The source's first coordinate value.
    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    /// The source's last coordinate value.
    pub fn end_value(&self) -> f64 {
        self.end_value
    }

    pub fn spacing(&self) -> Spacing {
        self.values.spacing()
    }

    pub fn values(&self) -> &AxisValues {
        &self.values
    }

    /// Step between samples of a regular axis.
    pub fn resolution(&self) -> Option<f64> {
        match self.values {
            AxisValues::Regular { start, end } if self.n_values > 1 => {
                Some((end - start) / (self.n_values - 1) as f64)
            }
            _ => None,
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.end_value >= self.start_value
    }

    /// Stored values in the layout the spacing implies.
    ///
    /// Yields n points, n + 1 edges, or 2n interleaved bounds. Regular axes
    /// return `None`: start, end and count describe them completely. The
    /// iterator is cheap to clone and calling again starts over.
    pub fn read_values(&self) -> Option<impl Iterator<Item = f64> + Clone + '_> {
        match &self.values {
            AxisValues::Regular { .. } => None,
            AxisValues::Points(v) | AxisValues::Edges(v) | AxisValues::Bounds(v) => {
                Some(v.iter().copied())
            }
        }
    }

    /// Coordinate of cell `index`; the midpoint for interval axes.
    pub fn coord_value(&self, index: usize) -> Option<f64> {
        if index >= self.n_values {
            return None;
        }
        let value = match &self.values {
            AxisValues::Regular { start, .. } => {
                start + index as f64 * self.resolution().unwrap_or(0.0)
            }
            AxisValues::Points(points) => points[index],
            AxisValues::Edges(edges) => (edges[index] + edges[index + 1]) / 2.0,
            AxisValues::Bounds(bounds) => (bounds[2 * index] + bounds[2 * index + 1]) / 2.0,
        };
        Some(value)
    }

    /// All cell coordinates.
    pub fn coord_values(&self) -> Vec<f64> {
        (0..self.n_values)
            .filter_map(|i| self.coord_value(i))
            .collect()
    }

    /// The n + 1 cell edges, or `None` for discontiguous intervals.
    pub fn coord_edges(&self) -> Option<Vec<f64>> {
        match &self.values {
            AxisValues::Regular { start, .. } => {
                let step = self.resolution().unwrap_or(0.0);
                Some(
                    (0..=self.n_values)
                        .map(|i| start + (i as f64 - 0.5) * step)
                        .collect(),
                )
            }
            AxisValues::Points(points) => Some(midpoint_edges(points)),
            AxisValues::Edges(edges) => Some(edges.clone()),
            AxisValues::Bounds(_) => None,
        }
    }

    /// Index of the cell containing `value`, or of the closest cell.
    ///
    /// Handles ascending and descending axes. Values beyond either end clamp
    /// to the first or last index. A value on an edge shared by two cells
    /// resolves to the lower index. In a gap between discontiguous cells the
    /// cell with the nearest midpoint wins. NaN resolves to 0.
    pub fn find_index_for_value(&self, value: f64) -> usize {
        let last = self.n_values - 1;
        if last == 0 || value.is_nan() {
            return 0;
        }

        match &self.values {
            AxisValues::Regular { start, .. } => {
                let step = self.resolution().unwrap_or(1.0);
                let position = (value - start) / step;
                (position - 0.5).ceil().clamp(0.0, last as f64) as usize
            }
            AxisValues::Points(points) => find_in_edges(&midpoint_edges(points), value),
            AxisValues::Edges(edges) => find_in_edges(edges, value),
            AxisValues::Bounds(bounds) => find_in_bounds(bounds, value),
        }
    }
}

/// Edges halfway between neighboring points, extrapolated at both ends.
fn midpoint_edges(points: &[f64]) -> Vec<f64> {
    let n = points.len();
    if n == 1 {
        return vec![points[0], points[0]];
    }

    let mut edges = Vec::with_capacity(n + 1);
    edges.push(points[0] - (points[1] - points[0]) / 2.0);
    edges.extend(points.windows(2).map(|w| (w[0] + w[1]) / 2.0));
    edges.push(points[n - 1] + (points[n - 1] - points[n - 2]) / 2.0);
    edges
}

/// Cell lookup over monotonic edges; clamps outside the range.
fn find_in_edges(edges: &[f64], value: f64) -> usize {
    let cells = edges.len() - 1;
    let ascending = edges[cells] >= edges[0];

    let index = if ascending {
        edges[1..].partition_point(|e| *e < value)
    } else {
        edges[1..].partition_point(|e| *e > value)
    };
    index.min(cells - 1)
}

/// Cell lookup over interleaved (lower, upper) pairs.
fn find_in_bounds(bounds: &[f64], value: f64) -> usize {
    let pairs = bounds.chunks_exact(2);

    if let Some(index) = pairs
        .clone()
        .position(|pair| value >= pair[0].min(pair[1]) && value <= pair[0].max(pair[1]))
    {
        return index;
    }

    let mut best = 0;
    let mut best_distance = f64::MAX;
    for (i, pair) in pairs.enumerate() {
        let distance = ((pair[0] + pair[1]) / 2.0 - value).abs();
        if distance < best_distance {
            best_distance = distance;
            best = i;
        }
    }
    best
}

fn nearly_equal(a: f64, b: f64, scale: f64) -> bool {
    (a - b).abs() <= SPACING_TOLERANCE * scale.abs().max(f64::MIN_POSITIVE)
}

fn typical_width(bounds: &AxisBounds) -> f64 {
    bounds
        .lower
        .iter()
        .zip(&bounds.upper)
        .map(|(lo, hi)| (hi - lo).abs())
        .fold(0.0, f64::max)
}
