//! Station collections and the point dataset that holds them.

use std::fmt;
use std::str::FromStr;

use ncss_common::{BoundingBox, SubsetError, SubsetResult};
use serde::{Deserialize, Serialize};

use crate::station::{StationFeature, VariableInfo};

/// Kind of point feature a collection holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureType {
    #[default]
    Station,
    StationProfile,
}

impl FeatureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::Station => "station",
            FeatureType::StationProfile => "stationProfile",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureType {
    type Err = SubsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "station" => Ok(FeatureType::Station),
            "stationprofile" | "station_profile" => Ok(FeatureType::StationProfile),
            other => Err(SubsetError::malformed(
                "featureType",
                format!("unsupported feature type '{}'", other),
            )),
        }
    }
}

/// A named group of station features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationCollection {
    pub name: String,
    #[serde(default)]
    pub features: Vec<StationFeature>,
}

impl StationCollection {
    pub fn new(name: impl Into<String>, features: Vec<StationFeature>) -> Self {
        Self {
            name: name.into(),
            features,
        }
    }

    pub fn all(&self) -> &[StationFeature] {
        &self.features
    }

    pub fn find(&self, name: &str) -> Option<&StationFeature> {
        self.features.iter().find(|f| f.name() == name)
    }

    /// Stations in name-list order; names not in the collection are skipped.
    pub fn by_names<'a, 'n, S: AsRef<str>>(
        &'a self,
        names: &'n [S],
    ) -> impl Iterator<Item = &'a StationFeature> + 'n
    where
        'a: 'n,
    {
        names.iter().filter_map(move |name| self.find(name.as_ref()))
    }

    /// Stations inside the box, boundary included.
    pub fn in_bbox(&self, bbox: BoundingBox) -> impl Iterator<Item = &StationFeature> + '_ {
        self.features
            .iter()
            .filter(move |f| bbox.contains_point(f.station.lon, f.station.lat))
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// A station collection tagged with its feature type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "featureType", rename_all = "camelCase")]
pub enum FeatureCollection {
    Station(StationCollection),
    StationProfile(StationCollection),
}

impl FeatureCollection {
    pub fn feature_type(&self) -> FeatureType {
        match self {
            FeatureCollection::Station(_) => FeatureType::Station,
            FeatureCollection::StationProfile(_) => FeatureType::StationProfile,
        }
    }

    pub fn stations(&self) -> &StationCollection {
        match self {
            FeatureCollection::Station(c) | FeatureCollection::StationProfile(c) => c,
        }
    }

    pub fn name(&self) -> &str {
        &self.stations().name
    }
}

/// An opened point dataset: feature collections plus variable metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationDataset {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub collections: Vec<FeatureCollection>,
    #[serde(default)]
    pub variables: Vec<VariableInfo>,
}

impl StationDataset {
    pub fn new(collections: Vec<FeatureCollection>, variables: Vec<VariableInfo>) -> Self {
        Self {
            location: String::new(),
            collections,
            variables,
        }
    }

    /// Parse a JSON dataset description.
    pub fn from_json(json: &str) -> SubsetResult<Self> {
        serde_json::from_str(json).map_err(|e| SubsetError::InvalidDataset(e.to_string()))
    }

    pub fn variable(&self, name: &str) -> Option<&VariableInfo> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Units for a variable, empty when unknown.
    pub fn units_of(&self, name: &str) -> &str {
        self.variable(name)
            .and_then(|v| v.units.as_deref())
            .unwrap_or("")
    }
}
