//! Station feature subsetting.
//!
//! Selects stations from point feature collections (by name list, bounding
//! box, nearest point, or all), restricts their observations in time, and
//! writes one row per remaining observation through a [`StationWriter`].
//!
//! ```ignore
//! let dataset = StationDataset::from_json(&json)?;
//! let request = SubsetRequest::from_query("stns=KDEN&time=present")?;
//! let mut writer = CsvWriter::new(std::io::stdout().lock());
//! write_station_subset(&dataset, &request, &SubsetConfig::default(), &mut writer)?;
//! ```

pub mod collection;
pub mod config;
pub mod nearest;
pub mod pipeline;
pub mod request;
pub mod selector;
pub mod station;
pub mod temporal;
pub mod writer;

pub use collection::{FeatureCollection, FeatureType, StationCollection, StationDataset};
pub use config::{SubsetConfig, VariablePresence};
pub use nearest::{distance_metric, find_closest};
pub use pipeline::write_station_subset;
pub use request::{SpatialSelection, SubsetRequest, ALL_STATIONS};
pub use selector::{has_variables, select_stations};
pub use station::{ObsValue, Observation, Station, StationFeature, VariableInfo};
pub use temporal::FeatureView;
pub use writer::{Column, CsvWriter, HeaderState, OutputFormat, Row, StationWriter, XmlWriter};
