//! Geometry model used by the `meridian` conversion engine.
//!
//! All geometries are expressed in geographic coordinates (longitude and latitude in degrees, WGS84 implied).
//! The model is intentionally small:
//!
//! * [`GeoPoint2d`](geo::GeoPoint2d) - a `(lon, lat)` pair;
//! * [`Ring`] - a closed sequence of at least 4 points, where the last point repeats the first one;
//! * [`Polygon`] - a polygon with a single exterior ring;
//! * [`MultiPolygon`] - a non-empty ordered set of polygons.
//!
//! Every geometry handled by the engine is a [`MultiPolygon`]. A single polygon is a multipolygon with one part,
//! so serializers never need to branch on the geometry kind.
//!
//! ```
//! use meridian_types::{lonlat, MultiPolygon, Polygon, Ring};
//!
//! let ring = Ring::new(vec![
//!     lonlat!(0.0, 0.0),
//!     lonlat!(1.0, 0.0),
//!     lonlat!(1.0, 1.0),
//!     lonlat!(0.0, 1.0),
//! ])
//! .unwrap();
//!
//! // The ring was closed automatically.
//! assert_eq!(ring.point_count(), 5);
//!
//! let geometry = MultiPolygon::from(Polygon::new(ring));
//! assert!(geometry.single().is_some());
//! ```

pub mod bounding_rect;
pub mod error;
pub mod geo;
mod impls;

#[cfg(feature = "geo-types")]
mod geo_types;

#[cfg(feature = "geojson")]
pub mod geojson;

pub use impls::{MultiPolygon, Polygon, Ring, MIN_RING_POINTS};
