//! Coordinate transforms: map projections and vertical formula terms.

use serde::{Deserialize, Serialize};

use crate::attribute::{find_attribute, Attribute};

/// What a transform converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    Projection,
    Vertical,
}

/// A transform as the source dataset declares it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransform {
    pub name: String,
    pub kind: TransformKind,
    #[serde(default)]
    pub parameters: Vec<Attribute>,
}

impl RawTransform {
    pub fn projection(name: impl Into<String>, parameters: Vec<Attribute>) -> Self {
        Self {
            name: name.into(),
            kind: TransformKind::Projection,
            parameters,
        }
    }

    pub fn vertical(name: impl Into<String>, parameters: Vec<Attribute>) -> Self {
        Self {
            name: name.into(),
            kind: TransformKind::Vertical,
            parameters,
        }
    }
}

/// A transform as exposed by the coverage dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordTransform {
    pub name: String,
    pub is_horiz: bool,
    pub attributes: Vec<Attribute>,
}

impl CoordTransform {
    pub fn from_raw(raw: &RawTransform) -> Self {
        Self {
            name: raw.name.clone(),
            is_horiz: raw.kind == TransformKind::Projection,
            attributes: raw.parameters.clone(),
        }
    }

    /// Look up a parameter by name, ignoring case.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        find_attribute(&self.attributes, name)
    }
}
