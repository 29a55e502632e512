//! Error types used by the crate.

use meridian_types::error::GeometryError;
use thiserror::Error;

/// Meridian error type.
#[derive(Debug, Error)]
pub enum MeridianError {
    /// WKT text starts with something other than `POLYGON` or `MULTIPOLYGON`.
    #[error("unsupported WKT geometry type: {0:?}")]
    UnsupportedGeometryType(String),
    /// A coordinate pair is not exactly two finite numbers.
    #[error("malformed coordinate: {0}")]
    MalformedCoordinate(String),
    /// Coordinate lies outside `[-180, 180]` longitude or `[-90, 90]` latitude.
    #[error("coordinate ({lon}, {lat}) is out of the lon/lat range")]
    CoordinateOutOfRange {
        /// Longitude.
        lon: f64,
        /// Latitude.
        lat: f64,
    },
    /// GraphQL document does not contain a `coordinates: [[...]]` block.
    #[error("polygon coordinates not found in the GraphQL document")]
    CoordinatesNotFound,
    /// Unknown target format token.
    #[error("format must be \"wkt\", \"graphql\", \"graphql:<name>\" or \"geojson\", got {0:?}")]
    InvalidFormat(String),
    /// Operation name is not a valid GraphQL name.
    #[error("invalid GraphQL operation name: {0:?}")]
    InvalidOperationName(String),
    /// Structurally invalid WKT text.
    #[error("WKT syntax error at offset {offset}: {message}")]
    Syntax {
        /// Byte offset of the offending token.
        offset: usize,
        /// What was expected.
        message: String,
    },
    /// Geometry violates model invariants (e.g. a ring with too few points).
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// Antimeridian correction failed.
    #[error("antimeridian correction failed: {0}")]
    Correction(String),
    /// Network failure while talking to the vessel API.
    #[cfg(feature = "http")]
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Vessel API answered with a non-success status.
    #[error("vessel API returned {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },
    /// Response is not the expected JSON document.
    #[error("invalid vessel API response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
