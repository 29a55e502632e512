//! Conversion between the geometry model and [`geojson`] geometries.
//!
//! Multipolygons are always written as GeoJSON `MultiPolygon` values, even when they consist of a single part.
//! Reading accepts both `Polygon` and `MultiPolygon` values.

use geojson::{PolygonType, Position, Value};

use crate::error::GeometryError;
use crate::geo::{GeoPoint, GeoPoint2d, NewGeoPoint};
use crate::{MultiPolygon, Polygon, Ring};

/// GeoJSON position of the point. The order is `[lon, lat]`.
pub fn position(point: &impl GeoPoint<Num = f64>) -> Position {
    vec![point.lon(), point.lat()]
}

fn convert_position(position: &Position) -> Result<GeoPoint2d, GeometryError> {
    match position.as_slice() {
        [lon, lat] => Ok(GeoPoint2d::lonlat(*lon, *lat)),
        _ => Err(GeometryError::Conversion(format!(
            "position must contain exactly 2 dimensions, got {}",
            position.len()
        ))),
    }
}

fn convert_polygon(polygon: &PolygonType) -> Result<Polygon, GeometryError> {
    match polygon.as_slice() {
        [exterior] => Ok(Polygon::new(Ring::new(
            exterior
                .iter()
                .map(convert_position)
                .collect::<Result<Vec<_>, _>>()?,
        )?)),
        [] => Err(GeometryError::EmptyRing { points: 0 }),
        _ => Err(GeometryError::Conversion(
            "polygons with interior rings are not supported".to_string(),
        )),
    }
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

impl From<&MultiPolygon> for geojson::Geometry {
    fn from(value: &MultiPolygon) -> Self {
        let coordinates = value
            .polygons()
            .map(|polygon| vec![polygon.exterior().iter_points().map(position).collect()])
            .collect();

        geojson::Geometry::new(Value::MultiPolygon(coordinates))
    }
}

impl TryFrom<&geojson::Geometry> for MultiPolygon {
    type Error = GeometryError;

    fn try_from(value: &geojson::Geometry) -> Result<Self, Self::Error> {
        match &value.value {
            Value::Polygon(polygon) => Ok(convert_polygon(polygon)?.into()),
            Value::MultiPolygon(mp) => MultiPolygon::new(
                mp.iter()
                    .map(convert_polygon)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            other => Err(GeometryError::Conversion(format!(
                "expected Polygon or MultiPolygon, got {}",
                value_type(other)
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lonlat;

    fn sample() -> MultiPolygon {
        MultiPolygon::from(Polygon::new(
            Ring::new(vec![
                lonlat!(0.0, 0.0),
                lonlat!(1.0, 0.0),
                lonlat!(1.0, 1.0),
                lonlat!(0.0, 1.0),
            ])
            .unwrap(),
        ))
    }

    #[test]
    fn single_polygon_is_written_as_multipolygon() {
        let geometry = geojson::Geometry::from(&sample());
        let Value::MultiPolygon(coordinates) = &geometry.value else {
            panic!("invalid geometry type");
        };

        assert_eq!(coordinates.len(), 1);
        assert_eq!(coordinates[0].len(), 1);
        assert_eq!(coordinates[0][0].len(), 5);
        assert_eq!(coordinates[0][0][1], vec![1.0, 0.0]);
    }

    #[test]
    fn reads_polygon_and_multipolygon() {
        let geometry = geojson::Geometry::from(&sample());
        assert_eq!(MultiPolygon::try_from(&geometry).unwrap(), sample());

        let polygon = geojson::Geometry::new(Value::Polygon(vec![vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 1.0],
            vec![0.0, 0.0],
        ]]));
        assert_eq!(MultiPolygon::try_from(&polygon).unwrap(), sample());
    }

    #[test]
    fn rejects_other_geometries() {
        let point = geojson::Geometry::new(Value::Point(vec![0.0, 0.0]));
        assert!(matches!(
            MultiPolygon::try_from(&point),
            Err(GeometryError::Conversion(_))
        ));

        let polygon_3d = geojson::Geometry::new(Value::Polygon(vec![vec![
            vec![0.0, 0.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 1.0],
            vec![0.0, 0.0, 1.0],
        ]]));
        assert!(MultiPolygon::try_from(&polygon_3d).is_err());
    }
}
