//! Configuration for station subsetting.

use serde::{Deserialize, Serialize};

use crate::collection::FeatureType;

/// How requested variables filter stations before spatial selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariablePresence {
    /// Keep a station only if every observation has every requested variable.
    #[default]
    EveryObservation,
    /// Keep a station if at least one observation has every requested variable.
    AnyObservation,
    /// Do not filter.
    Off,
}

impl VariablePresence {
    /// Parse from string (case-insensitive). Unknown values fall back to the default.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "every_observation" | "every" | "all" => Self::EveryObservation,
            "any_observation" | "any" => Self::AnyObservation,
            "off" | "none" => Self::Off,
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EveryObservation => "every_observation",
            Self::AnyObservation => "any_observation",
            Self::Off => "off",
        }
    }
}

/// Configuration for the station subset pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubsetConfig {
    /// Variable-presence pre-filter policy.
    pub variable_presence: VariablePresence,

    /// Fraction digits for latitude/longitude in text output.
    pub coord_decimals: usize,

    /// Feature type used when a request does not name one.
    pub default_feature_type: FeatureType,
}

impl Default for SubsetConfig {
    fn default() -> Self {
        Self {
            variable_presence: VariablePresence::EveryObservation,
            coord_decimals: 3,
            default_feature_type: FeatureType::Station,
        }
    }
}

impl SubsetConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `NCSS_VARIABLE_PRESENCE`, `NCSS_COORD_DECIMALS` and
    /// `NCSS_DEFAULT_FEATURE_TYPE`. Unset or unparsable values keep defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup("NCSS_VARIABLE_PRESENCE") {
            config.variable_presence = VariablePresence::from_str(&val);
        }

        if let Some(val) = lookup("NCSS_COORD_DECIMALS") {
            if let Ok(decimals) = val.trim().parse() {
                config.coord_decimals = decimals;
            }
        }

        if let Some(val) = lookup("NCSS_DEFAULT_FEATURE_TYPE") {
            if let Ok(feature_type) = val.parse() {
                config.default_feature_type = feature_type;
            }
        }

        config
    }

    /// Parse a YAML document. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.coord_decimals > 12 {
            return Err("coord_decimals must be 0-12".to_string());
        }
        Ok(())
    }
}
