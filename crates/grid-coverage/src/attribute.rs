//! Name/value attributes attached to datasets, coverages and transforms.

use serde::{Deserialize, Serialize};

/// An attribute value: text or a numeric array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Numbers(Vec<f64>),
}

/// A named attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: AttributeValue,
}

impl Attribute {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::Text(value.into()),
        }
    }

    pub fn number(name: impl Into<String>, value: f64) -> Self {
        Self::numbers(name, vec![value])
    }

    pub fn numbers(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::Numbers(values),
        }
    }

    /// The text value, if this is a text attribute.
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            AttributeValue::Text(s) => Some(s),
            AttributeValue::Numbers(_) => None,
        }
    }

    /// The first numeric value, if any.
    pub fn as_number(&self) -> Option<f64> {
        match &self.value {
            AttributeValue::Numbers(values) => values.first().copied(),
            AttributeValue::Text(_) => None,
        }
    }
}

/// Find an attribute by name, ignoring case.
pub fn find_attribute<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attributes
        .iter()
        .find(|att| att.name.eq_ignore_ascii_case(name))
}
