//! Coverage adapter for gridded datasets.
//!
//! Presents an opened gridded dataset (anything implementing [`GridSource`])
//! as a uniform coverage model:
//!
//! - coordinate axes classified by [`Spacing`] and stored in the matching
//!   layout (points, edges or interleaved bounds)
//! - dataset-wide transform and axis lists deduplicated by name
//! - coverage lookup and level-based data reads through [`GridSubset`]

pub mod attribute;
pub mod axis;
pub mod coordsys;
pub mod dataset;
pub mod error;
pub mod source;
pub mod spacing;
pub mod subset;
pub mod transform;

pub use attribute::{find_attribute, Attribute, AttributeValue};
pub use axis::{AxisBounds, AxisType, AxisValues, CoordAxis, DataType, RawAxis};
pub use coordsys::{collect_axes, collect_transforms, GridCoordSys, RawCoordSys};
pub use dataset::{GridCoverage, GridCoverageDataset};
pub use error::{CoverageError, Result};
pub use source::{GridArray, GridSource, InMemoryGridSource, RawGrid, SliceRange, SliceRequest, StoredArray};
pub use spacing::{AxisTraits, Spacing, UnknownSpacingCode};
pub use subset::{GridSubset, VERTICAL};
pub use transform::{CoordTransform, RawTransform, TransformKind};
