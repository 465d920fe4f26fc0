//! Subset parameters for a coverage read.

use crate::error::{CoverageError, Result};

/// Key of the vertical-level subset entry.
pub const VERTICAL: &str = "Z";

/// Ordered key/value subset parameters.
///
/// Only [`VERTICAL`] is interpreted today; other keys are carried but ignored
/// by [`GridCoverageDataset::read_data`](crate::GridCoverageDataset::read_data).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridSubset {
    entries: Vec<(String, String)>,
}

impl GridSubset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. A repeated key shadows earlier values.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Shorthand for a vertical coordinate entry.
    pub fn with_vertical(self, value: f64) -> Self {
        self.set(VERTICAL, value.to_string())
    }

    /// The latest value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The requested vertical coordinate, if any.
    pub fn vertical_value(&self) -> Result<Option<f64>> {
        match self.get(VERTICAL) {
            None => Ok(None),
            Some(raw) => raw.trim().parse::<f64>().map(Some).map_err(|_| {
                CoverageError::invalid_subset(
                    VERTICAL,
                    format!("'{}' is not a number", raw),
                )
            }),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for GridSubset {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_value_parsed() {
        let subset = GridSubset::new().set("Z", " 850 ");
        assert_eq!(subset.vertical_value().unwrap(), Some(850.0));
    }

    #[test]
    fn test_missing_vertical_value() {
        assert_eq!(GridSubset::new().vertical_value().unwrap(), None);
    }

    #[test]
    fn test_last_entry_wins() {
        let subset = GridSubset::new().set("Z", "1000").with_vertical(500.0);
        assert_eq!(subset.vertical_value().unwrap(), Some(500.0));
    }

    #[test]
    fn test_malformed_vertical_value() {
        let err = GridSubset::new().set("Z", "surface").vertical_value().unwrap_err();
        assert!(matches!(err, CoverageError::InvalidSubset { ref key, .. } if key == "Z"));
    }

    #[test]
    fn test_collect_from_pairs() {
        let subset: GridSubset = vec![("time", "2024-01-01T00:00:00Z"), ("Z", "2")]
            .into_iter()
            .collect();
        assert_eq!(subset.keys().collect::<Vec<_>>(), vec!["time", "Z"]);
        assert_eq!(subset.get("time"), Some("2024-01-01T00:00:00Z"));
    }
}
