//! Error types for subset requests.

use thiserror::Error;

use crate::bbox::BboxParseError;
use crate::time::TimeParseError;

/// Result type alias using SubsetError.
pub type SubsetResult<T> = Result<T, SubsetError>;

/// Primary error type for coverage and station subset operations.
#[derive(Debug, Error)]
pub enum SubsetError {
    // === Request Errors ===
    #[error("Invalid value for '{param}': {message}")]
    MalformedCriterion { param: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No features are in the requested subset")]
    EmptySubset,

    // === Data Errors ===
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Failed to read data: {0}")]
    DataRead(String),

    // === Output Errors ===
    #[error("Failed to write response: {0}")]
    Write(String),
}

impl SubsetError {
    /// Create a MalformedCriterion error.
    pub fn malformed(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedCriterion {
            param: param.into(),
            message: message.into(),
        }
    }

    /// True for failures caused by the request rather than the server.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            SubsetError::MalformedCriterion { .. }
                | SubsetError::NotFound(_)
                | SubsetError::EmptySubset
        )
    }

    /// Get the HTTP status code a front end should answer with.
    pub fn http_status_code(&self) -> u16 {
        match self {
            SubsetError::MalformedCriterion { .. } => 400,
            SubsetError::NotFound(_) | SubsetError::EmptySubset => 404,
            _ => 500,
        }
    }
}

impl From<std::io::Error> for SubsetError {
    fn from(err: std::io::Error) -> Self {
        SubsetError::Write(err.to_string())
    }
}

impl From<BboxParseError> for SubsetError {
    fn from(err: BboxParseError) -> Self {
        SubsetError::malformed("bbox", err.to_string())
    }
}

impl From<TimeParseError> for SubsetError {
    fn from(err: TimeParseError) -> Self {
        SubsetError::malformed("time", err.to_string())
    }
}
