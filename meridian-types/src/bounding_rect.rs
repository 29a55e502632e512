//! Longitude/latitude bounding rectangle.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Axis aligned rectangle in degrees. Longitudes are not wrapped, so a rectangle of an unwrapped ring can extend
/// beyond `±180`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect<N: Float = f64> {
    /// Westmost longitude.
    pub lon_min: N,
    /// Southmost latitude.
    pub lat_min: N,
    /// Eastmost longitude.
    pub lon_max: N,
    /// Northmost latitude.
    pub lat_max: N,
}

impl<N: Float> BoundingRect<N> {
    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            lon_min: self.lon_min.min(other.lon_min),
            lat_min: self.lat_min.min(other.lat_min),
            lon_max: self.lon_max.max(other.lon_max),
            lat_max: self.lat_max.max(other.lat_max),
        }
    }

    /// Rectangle of the given points, or `None` if the iterator is empty.
    pub fn from_points<'a, P: GeoPoint<Num = N> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let init = Self {
            lon_min: first.lon(),
            lat_min: first.lat(),
            lon_max: first.lon(),
            lat_max: first.lat(),
        };

        Some(points.fold(init, |rect, p| Self {
            lon_min: rect.lon_min.min(p.lon()),
            lat_min: rect.lat_min.min(p.lat()),
            lon_max: rect.lon_max.max(p.lon()),
            lat_max: rect.lat_max.max(p.lat()),
        }))
    }

    /// Whether the whole rectangle lies within `[-180, 180]` longitude.
    pub fn is_within_lon_bounds(&self) -> bool {
        let limit = N::from(180.0).unwrap_or_else(N::max_value);
        self.lon_min >= -limit && self.lon_max <= limit
    }
}
