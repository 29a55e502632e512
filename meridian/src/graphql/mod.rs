//! GraphQL area-of-interest documents.
//!
//! [`build`] fills the vessels query template with an area-of-interest filter, [`extract`] reads the polygon back
//! from such a document. Extraction is not a full GraphQL parse: it only looks for the first
//! `coordinates: [[...]]` block and scans its brackets.
//!
//! ```
//! use meridian::{graphql, wkt};
//!
//! let geometry = wkt::parse("POLYGON((0 0, 1 0, 1 1, 0 1, 0 0))").unwrap();
//! let query = graphql::build(&geometry, "square").unwrap();
//! assert!(query.contains("polygon: {"));
//! assert!(query.contains(r#"type: "Polygon""#));
//!
//! assert_eq!(
//!     graphql::extract(&query).unwrap(),
//!     "POLYGON((0 0, 1 0, 1 1, 0 1, 0 0))"
//! );
//! ```

mod builder;
mod extractor;

pub use builder::{build, DEFAULT_OPERATION_NAME};
pub use extractor::{extract, extract_polygon};
