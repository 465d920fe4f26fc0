//! Common types and utilities shared across the NetCDF subset service crates.

pub mod bbox;
pub mod error;
pub mod geo;
pub mod time;

pub use bbox::{BboxParseError, BoundingBox};
pub use error::{SubsetError, SubsetResult};
pub use geo::{lon_normal, LatLonPoint};
pub use time::{format_iso8601, parse_iso8601, TimeParseError, TimeRange};
