//! Well-Known Text codec for `POLYGON` and `MULTIPOLYGON` geometries.
//!
//! Parsing is done by a small recursive descent parser over a token stream, so malformed input is rejected
//! structurally:
//!
//! ```
//! use meridian::wkt;
//!
//! let geometry = wkt::parse("MULTIPOLYGON (((0 0, 1 0, 1 1, 0 0)), ((5 5, 6 5, 6 6, 5 5)))").unwrap();
//! assert_eq!(geometry.polygon_count(), 2);
//! assert_eq!(
//!     wkt::serialize(&geometry),
//!     "MULTIPOLYGON(((0 0, 1 0, 1 1, 0 0)), ((5 5, 6 5, 6 6, 5 5)))"
//! );
//! ```
//!
//! Serialization writes `POLYGON((...))` for single-part geometries and `MULTIPOLYGON(((...)), ((...)))` otherwise,
//! reproducing the points of every ring in their original order.

mod lexer;
mod parser;
mod writer;

use meridian_types::geo::{GeoPoint2d, NewGeoPoint};
use meridian_types::MultiPolygon;

use crate::error::MeridianError;

const POLYGON: &str = "POLYGON";
const MULTIPOLYGON: &str = "MULTIPOLYGON";

/// Parses a coordinate value. Only finite numbers are accepted.
pub(crate) fn number(word: &str) -> Result<f64, MeridianError> {
    match word.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(MeridianError::MalformedCoordinate(format!(
            "{word:?} is not a finite number"
        ))),
    }
}

/// Creates a point, checking that it lies within `[-180, 180]` longitude and `[-90, 90]` latitude.
pub(crate) fn point(lon: f64, lat: f64) -> Result<GeoPoint2d, MeridianError> {
    if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
        return Err(MeridianError::CoordinateOutOfRange { lon, lat });
    }

    Ok(GeoPoint2d::lonlat(lon, lat))
}

/// Parses a `POLYGON` or `MULTIPOLYGON` WKT document.
///
/// The keyword is case-sensitive. Open rings are closed by repeating their first point.
pub fn parse(text: &str) -> Result<MultiPolygon, MeridianError> {
    let geometry = parser::Parser::new(text).parse()?;
    log::debug!(
        "Parsed WKT geometry with {} polygon(s)",
        geometry.polygon_count()
    );
    Ok(geometry)
}

/// Writes the geometry as WKT.
pub fn serialize(geometry: &MultiPolygon) -> String {
    let mut out = String::new();
    writer::write_geometry(&mut out, geometry);
    out
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use meridian_types::error::GeometryError;
    use meridian_types::geo::GeoPoint;
    use meridian_types::{lonlat, Polygon, Ring};

    use super::*;

    fn ring(points: &[(f64, f64)]) -> Ring {
        Ring::new(points.iter().map(|(lon, lat)| lonlat!(*lon, *lat)).collect()).unwrap()
    }

    #[test]
    fn parse_polygon() {
        let geometry = parse("POLYGON((170 10, -170 10, -170 20, 170 20, 170 10))").unwrap();
        let polygon = geometry.single().unwrap();
        let points = polygon.exterior().points();
        assert_eq!(points.len(), 5);
        assert_eq!(points[1].lon(), -170.0);
        assert_eq!(points[1].lat(), 10.0);
    }

    #[test]
    fn parse_tolerates_whitespace() {
        let compact = parse("POLYGON((0 0,1 0,1 1,0 1,0 0))").unwrap();
        let spaced = parse("  POLYGON (( 0 0 , 1 0,\n 1 1, 0 1, 0 0 ))\n").unwrap();
        assert_eq!(compact, spaced);
    }

    #[test]
    fn parse_multipolygon() {
        let geometry = parse(
            "MULTIPOLYGON (((180 10, 170 10, 170 20, 180 20, 180 10)), \
             ((-180 20, -170 20, -170 10, -180 10, -180 20)))",
        )
        .unwrap();
        assert_eq!(geometry.polygon_count(), 2);
        assert_eq!(geometry.parts()[0].exterior().start(), lonlat!(180.0, 10.0));
        assert_eq!(geometry.parts()[1].exterior().start(), lonlat!(-180.0, 20.0));
    }

    #[test]
    fn parse_closes_open_ring() {
        let geometry = parse("POLYGON((0 0, 1 0, 1 1, 0 1))").unwrap();
        assert_eq!(serialize(&geometry), "POLYGON((0 0, 1 0, 1 1, 0 1, 0 0))");
    }

    #[test]
    fn unsupported_geometry_type() {
        assert_matches!(
            parse("POINT(0 0)"),
            Err(MeridianError::UnsupportedGeometryType(t)) if t == "POINT"
        );
        assert_matches!(
            parse("polygon((0 0, 1 0, 1 1, 0 0))"),
            Err(MeridianError::UnsupportedGeometryType(_))
        );
        assert_matches!(parse(""), Err(MeridianError::UnsupportedGeometryType(_)));
        assert_matches!(
            parse("POLYGON Z ((0 0 0, 1 0 0, 1 1 0, 0 0 0))"),
            Err(MeridianError::UnsupportedGeometryType(t)) if t == "POLYGON Z"
        );
        assert_matches!(
            parse("POLYGON((0 0, 9 0, 9 9, 0 0), (1 1, 2 1, 2 2, 1 1))"),
            Err(MeridianError::UnsupportedGeometryType(_))
        );
    }

    #[test]
    fn malformed_coordinate() {
        assert_matches!(
            parse("POLYGON((0 0 1, 1 0, 1 1, 0 0))"),
            Err(MeridianError::MalformedCoordinate(_))
        );
        assert_matches!(
            parse("POLYGON((0, 1 0, 1 1, 0 0))"),
            Err(MeridianError::MalformedCoordinate(_))
        );
        assert_matches!(
            parse("POLYGON((0 zero, 1 0, 1 1, 0 0))"),
            Err(MeridianError::MalformedCoordinate(_))
        );
        assert_matches!(
            parse("POLYGON((0 NaN, 1 0, 1 1, 0 0))"),
            Err(MeridianError::MalformedCoordinate(_))
        );
    }

    #[test]
    fn coordinate_out_of_range() {
        assert_matches!(
            parse("POLYGON((0 0, 1e12 0, 1e12 1, 0 1, 0 0))"),
            Err(MeridianError::CoordinateOutOfRange { lon, lat }) if lon == 1e12 && lat == 0.0
        );
        assert_matches!(
            parse("POLYGON((0 0, 1 0, 1 90.5, 0 0))"),
            Err(MeridianError::CoordinateOutOfRange { .. })
        );
        assert_matches!(
            parse("POLYGON((-180.000001 0, 1 0, 1 1, -180.000001 0))"),
            Err(MeridianError::CoordinateOutOfRange { .. })
        );
        assert!(parse("POLYGON((-180 -90, 180 -90, 180 90, -180 -90))").is_ok());
    }

    #[test]
    fn syntax_errors() {
        assert_matches!(
            parse("POLYGON((0 0, 1 0, 1 1, 0 0)"),
            Err(MeridianError::Syntax { offset: 28, .. })
        );
        assert_matches!(
            parse("POLYGON(0 0, 1 0, 1 1, 0 0)"),
            Err(MeridianError::Syntax { offset: 8, .. })
        );
        assert_matches!(
            parse("POLYGON((0 0, 1 0, 1 1, 0 0)) POLYGON((0 0, 1 0, 1 1, 0 0))"),
            Err(MeridianError::Syntax { offset: 30, .. })
        );
    }

    #[test]
    fn too_short_ring() {
        assert_matches!(
            parse("POLYGON((0 0, 1 1, 0 0))"),
            Err(MeridianError::Geometry(GeometryError::EmptyRing { points: 3 }))
        );
    }

    #[test]
    fn serialize_single_and_multi() {
        let square = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let shifted = ring(&[(10.5, 0.0), (11.0, 0.0), (11.0, 1.25), (10.5, 0.0)]);

        let single = MultiPolygon::from(Polygon::new(square.clone()));
        assert_eq!(serialize(&single), "POLYGON((0 0, 1 0, 1 1, 0 1, 0 0))");

        let multi = MultiPolygon::new(vec![Polygon::new(square), Polygon::new(shifted)]).unwrap();
        assert_eq!(
            serialize(&multi),
            "MULTIPOLYGON(((0 0, 1 0, 1 1, 0 1, 0 0)), ((10.5 0, 11 0, 11 1.25, 10.5 0)))"
        );
    }

    #[test]
    fn round_trip_preserves_points() {
        let geometry = MultiPolygon::new(vec![
            Polygon::new(ring(&[
                (179.999999, -0.1),
                (-179.5, 1e-7),
                (-179.5, 33.333333333333336),
                (179.999999, -0.1),
            ])),
            Polygon::new(ring(&[(1.0, 1.0), (1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)])),
        ])
        .unwrap();

        assert_eq!(parse(&serialize(&geometry)).unwrap(), geometry);
    }
}
