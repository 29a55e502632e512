use geo_types::{coord, Coord, CoordFloat};

use crate::geo::{GeoPoint, GeoPoint2d, NewGeoPoint};

impl<T: CoordFloat> GeoPoint for Coord<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y
    }

    fn lon(&self) -> Self::Num {
        self.x
    }
}

impl<T: CoordFloat> NewGeoPoint<T> for Coord<T> {
    fn latlon(lat: T, lon: T) -> Self {
        coord!(x: lon, y: lat)
    }
}

impl From<GeoPoint2d> for Coord<f64> {
    fn from(value: GeoPoint2d) -> Self {
        coord!(x: value.lon(), y: value.lat())
    }
}

impl From<Coord<f64>> for GeoPoint2d {
    fn from(value: Coord<f64>) -> Self {
        GeoPoint2d::from(&value)
    }
}
