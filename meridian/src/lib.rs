//! Meridian converts an area of interest between WKT polygons, GraphQL vessel query filters and GeoJSON, and splits
//! polygons crossing the antimeridian so that they stay valid in plain longitude/latitude coordinates.
//!
//! # Quick start
//!
//! ```
//! use meridian::convert::{convert, Converted, TargetFormat};
//!
//! let query = convert(
//!     "POLYGON((170 10, -170 10, -170 20, 170 20, 170 10))",
//!     &"graphql:pacific".parse::<TargetFormat>().unwrap(),
//!     true,
//! )
//! .unwrap();
//!
//! // The polygon crossed the antimeridian, so it was split into two parts.
//! let Converted::GraphQl(query) = query else { panic!() };
//! assert!(query.contains("multiPolygon: {"));
//! ```
//!
//! # Main components
//!
//! Every geometry is a [`MultiPolygon`](meridian_types::MultiPolygon) from the `meridian-types` crate. A single
//! polygon is a multipolygon with one part. Around it:
//!
//! * [`wkt`] parses and writes WKT text;
//! * [`antimeridian`] defines the [`AntimeridianCorrector`](antimeridian::AntimeridianCorrector) capability and its
//!   default implementation [`SplitCorrector`](antimeridian::SplitCorrector);
//! * [`graphql`] builds vessel queries with an area-of-interest filter and reads the polygon back from them;
//! * [`geojson`] assembles GeoJSON features and collections;
//! * [`convert`] ties them together behind a single call.
//!
//! To query the vessels inside the area, use a [`Pipeline`](pipeline::Pipeline) with a [`VesselApi`](client::VesselApi)
//! implementation, e.g. [`HttpVesselClient`](client::HttpVesselClient) (requires `http` feature, enabled by default).

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod antimeridian;
pub mod client;
pub mod convert;
pub mod error;
pub mod geojson;
pub mod graphql;
pub mod pipeline;
pub mod vessels;
pub mod wkt;

pub use antimeridian::{AntimeridianCorrector, SplitCorrector};
pub use convert::{convert, convert_with, Converted, TargetFormat};
pub use error::MeridianError;

// Reexport meridian_types
pub use meridian_types;
