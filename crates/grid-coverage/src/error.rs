//! Error types for coverage adaptation and subsetting.

use ncss_common::SubsetError;
use thiserror::Error;

/// Errors that can occur while adapting a grid dataset or reading from it.
#[derive(Error, Debug)]
pub enum CoverageError {
    /// A coordinate axis cannot be represented.
    #[error("invalid axis '{axis}': {message}")]
    InvalidAxis { axis: String, message: String },

    /// A grid references a coordinate system the dataset does not declare.
    #[error("grid '{grid}' references unknown coordinate system '{coord_sys}'")]
    UnknownCoordSys { grid: String, coord_sys: String },

    /// The named grid is not part of the dataset.
    #[error("grid not found: {0}")]
    UnknownGrid(String),

    /// A subset entry could not be interpreted.
    #[error("invalid subset entry '{key}': {message}")]
    InvalidSubset { key: String, message: String },

    /// A vertical subset was requested on a coverage without a vertical axis.
    #[error("coverage '{0}' has no vertical axis")]
    NoVerticalAxis(String),

    /// A slice index lies outside the array.
    #[error("{dim} index {index} is outside dimension of length {len}")]
    SliceOutOfBounds {
        dim: &'static str,
        index: usize,
        len: usize,
    },

    /// The underlying dataset failed to produce data.
    #[error("failed to read grid data: {0}")]
    ReadFailed(String),

    /// A dataset description could not be parsed.
    #[error("invalid dataset description: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CoverageError {
    /// Create an InvalidAxis error.
    pub fn invalid_axis(axis: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidAxis {
            axis: axis.into(),
            message: message.into(),
        }
    }

    /// Create an InvalidSubset error.
    pub fn invalid_subset(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSubset {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a ReadFailed error.
    pub fn read_failed(msg: impl Into<String>) -> Self {
        Self::ReadFailed(msg.into())
    }
}

impl From<CoverageError> for SubsetError {
    fn from(err: CoverageError) -> Self {
        match err {
            CoverageError::InvalidSubset { key, message } => {
                SubsetError::MalformedCriterion { param: key, message }
            }
            CoverageError::NoVerticalAxis(_) => SubsetError::malformed("Z", err.to_string()),
            CoverageError::UnknownGrid(name) => SubsetError::NotFound(name),
            CoverageError::SliceOutOfBounds { .. } | CoverageError::ReadFailed(_) => {
                SubsetError::DataRead(err.to_string())
            }
            CoverageError::InvalidAxis { .. }
            | CoverageError::UnknownCoordSys { .. }
            | CoverageError::Parse(_) => SubsetError::InvalidDataset(err.to_string()),
        }
    }
}

/// Result type for coverage operations.
pub type Result<T> = std::result::Result<T, CoverageError>;
