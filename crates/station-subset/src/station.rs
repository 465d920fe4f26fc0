//! Stations and their time-ordered observations.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fixed observing location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wmo_id: Option<String>,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

impl Station {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            wmo_id: None,
            lat,
            lon,
            altitude: None,
        }
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }
}

impl AsRef<Station> for Station {
    fn as_ref(&self) -> &Station {
        self
    }
}

/// One observed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObsValue {
    Number(f64),
    Text(String),
    Missing,
}

impl fmt::Display for ObsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObsValue::Number(v) => write!(f, "{}", v),
            ObsValue::Text(s) => f.write_str(s),
            ObsValue::Missing => Ok(()),
        }
    }
}

impl From<f64> for ObsValue {
    fn from(v: f64) -> Self {
        ObsValue::Number(v)
    }
}

impl From<&str> for ObsValue {
    fn from(s: &str) -> Self {
        ObsValue::Text(s.to_string())
    }
}

/// All values recorded at one station at one time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub values: BTreeMap<String, ObsValue>,
}

impl Observation {
    pub fn new(time: DateTime<Utc>) -> Self {
        Self {
            time,
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<ObsValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&ObsValue> {
        self.values.get(name)
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

/// A station and its observations, in time order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StationFeatureRepr")]
pub struct StationFeature {
    pub station: Station,
    observations: Vec<Observation>,
}

#[derive(Deserialize)]
struct StationFeatureRepr {
    station: Station,
    #[serde(default)]
    observations: Vec<Observation>,
}

impl From<StationFeatureRepr> for StationFeature {
    fn from(repr: StationFeatureRepr) -> Self {
        StationFeature::new(repr.station, repr.observations)
    }
}

impl StationFeature {
    /// Observations are sorted by time; equal times keep their input order.
    pub fn new(station: Station, mut observations: Vec<Observation>) -> Self {
        observations.sort_by_key(|obs| obs.time);
        Self {
            station,
            observations,
        }
    }

    pub fn name(&self) -> &str {
        &self.station.name
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }
}

impl AsRef<Station> for StationFeature {
    fn as_ref(&self) -> &Station {
        &self.station
    }
}

/// Metadata for an observed variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VariableInfo {
    pub fn new(name: impl Into<String>, units: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: Some(units.into()),
            description: None,
        }
    }
}
