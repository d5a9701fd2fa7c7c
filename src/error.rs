//! Error types for network construction, inference and training

use thiserror::Error;

/// Errors surfaced by the public network API.
///
/// Nothing is retried or recovered internally: every variant is returned to the
/// caller of the operation that detected it.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The topology has a zero count or an unusable learning rate.
    #[error("Invalid topology: {0}")]
    Configuration(String),

    /// A dataset row does not fit the topology, or a dataset file is malformed.
    #[error("Error in dataset: {0}")]
    Dataset(String),

    /// A vector passed to `predict` or `calculate_errors` has the wrong length.
    #[error("Size mismatch: expected {expected} values, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
