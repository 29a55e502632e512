use geo_types::{Coord, LineString};

use crate::error::GeometryError;
use crate::{MultiPolygon, Polygon, Ring};

impl From<&Ring> for LineString<f64> {
    fn from(value: &Ring) -> Self {
        LineString::new(value.iter_points().map(|p| Coord::from(*p)).collect())
    }
}

impl From<&Polygon> for geo_types::Polygon<f64> {
    fn from(value: &Polygon) -> Self {
        geo_types::Polygon::new(value.exterior().into(), vec![])
    }
}

impl From<&MultiPolygon> for geo_types::MultiPolygon<f64> {
    fn from(value: &MultiPolygon) -> Self {
        geo_types::MultiPolygon::new(value.polygons().map(Into::into).collect())
    }
}

impl TryFrom<&LineString<f64>> for Ring {
    type Error = GeometryError;

    fn try_from(value: &LineString<f64>) -> Result<Self, Self::Error> {
        Ring::new(value.coords().map(|c| (*c).into()).collect())
    }
}

impl TryFrom<&geo_types::Polygon<f64>> for Polygon {
    type Error = GeometryError;

    fn try_from(value: &geo_types::Polygon<f64>) -> Result<Self, Self::Error> {
        if !value.interiors().is_empty() {
            return Err(GeometryError::Conversion(
                "polygons with interior rings are not supported".to_string(),
            ));
        }

        Ok(Polygon::new(value.exterior().try_into()?))
    }
}

impl TryFrom<&geo_types::MultiPolygon<f64>> for MultiPolygon {
    type Error = GeometryError;

    fn try_from(value: &geo_types::MultiPolygon<f64>) -> Result<Self, Self::Error> {
        MultiPolygon::new(
            value
                .0
                .iter()
                .map(Polygon::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lonlat;

    #[test]
    fn round_trip_through_geo_types() {
        let geometry = MultiPolygon::from(Polygon::new(
            Ring::new(vec![
                lonlat!(170.0, 10.0),
                lonlat!(-170.0, 10.0),
                lonlat!(-170.0, 20.0),
                lonlat!(170.0, 20.0),
            ])
            .unwrap(),
        ));

        let converted = geo_types::MultiPolygon::from(&geometry);
        assert_eq!(converted.0.len(), 1);
        assert_eq!(converted.0[0].exterior().0.len(), 5);
        assert_eq!(converted.0[0].exterior().0[1], geo_types::coord!(x: -170.0, y: 10.0));

        assert_eq!(MultiPolygon::try_from(&converted).unwrap(), geometry);
    }

    #[test]
    fn rejects_holes() {
        let square = |size: f64| {
            LineString::from(vec![(0.0, 0.0), (size, 0.0), (size, size), (0.0, size), (0.0, 0.0)])
        };
        let with_hole = geo_types::Polygon::new(square(10.0), vec![square(1.0)]);
        assert!(matches!(
            Polygon::try_from(&with_hole),
            Err(GeometryError::Conversion(_))
        ));
    }
}
