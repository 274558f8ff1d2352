//! Error types for trisweep operations.

use thiserror::Error;

/// Errors that can occur while building a triangulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DelaunayError {
    /// Three points of a circumcircle computation share a y-coordinate within
    /// tolerance, so no bisector intersection can be resolved.
    #[error("coincident points: {i}, {j}, {k}")]
    CoincidentPoints {
        /// Index of the first point.
        i: usize,
        /// Index of the second point.
        j: usize,
        /// Index of the third point.
        k: usize,
    },

    /// An input point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Index of the offending point in the input.
        index: usize,
    },

    /// Configuration validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for triangulation operations.
pub type Result<T> = std::result::Result<T, DelaunayError>;
