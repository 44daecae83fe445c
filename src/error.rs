//! Error types for graph lookups and parameter validation

use thiserror::Error;

/// Errors returned by the graph and clustering layers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScanError {
    /// No vertex with this identity exists in the graph.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    /// A clustering parameter is out of its accepted range.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: String,
    },
}

/// Result type for fallible graph operations.
pub type ScanResult<T> = std::result::Result<T, ScanError>;
