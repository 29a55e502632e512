//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A ring does not have enough points to enclose an area.
    #[error("ring must contain at least 4 points including the closing one, got {points}")]
    EmptyRing {
        /// Number of points after ring closure.
        points: usize,
    },
    /// A multipolygon without any parts.
    #[error("multipolygon must contain at least one polygon")]
    EmptyMultiPolygon,
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
}
