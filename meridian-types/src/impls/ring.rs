use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::bounding_rect::BoundingRect;
use crate::error::GeometryError;
use crate::geo::{GeoPoint, GeoPoint2d};

/// Minimum number of points of a ring, including the closing point.
pub const MIN_RING_POINTS: usize = 4;

/// Closed sequence of points bounding a polygon.
///
/// Unlike open contours, the last point of a ring always repeats the first one, the same way WKT and GeoJSON
/// linear rings do. The only way to construct a ring is [`Ring::new`], which keeps this invariant.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "Vec<GeoPoint2d>", into = "Vec<GeoPoint2d>")]
pub struct Ring {
    points: Vec<GeoPoint2d>,
}

impl Ring {
    /// Creates a new ring.
    ///
    /// If the last point differs from the first one, a copy of the first point is appended. Fails with
    /// [`GeometryError::EmptyRing`] if the closed ring has less than [`MIN_RING_POINTS`] points.
    pub fn new(mut points: Vec<GeoPoint2d>) -> Result<Self, GeometryError> {
        let (Some(&first), Some(last)) = (points.first(), points.last()) else {
            return Err(GeometryError::EmptyRing { points: 0 });
        };

        if first != *last {
            points.push(first);
        }

        if points.len() < MIN_RING_POINTS {
            return Err(GeometryError::EmptyRing {
                points: points.len(),
            });
        }

        Ok(Self { points })
    }

    /// Points of the ring, including the closing one.
    pub fn points(&self) -> &[GeoPoint2d] {
        &self.points
    }

    /// Iterates over the points of the ring, including the closing one.
    pub fn iter_points(&self) -> impl Iterator<Item = &'_ GeoPoint2d> {
        self.points.iter()
    }

    /// Number of points, including the closing one.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// First (and last) point of the ring.
    pub fn start(&self) -> GeoPoint2d {
        // Non-empty by construction.
        self.points[0]
    }

    /// Bounding rectangle of the ring.
    pub fn bounding_rect(&self) -> BoundingRect {
        let start = self.start();
        BoundingRect::from_points(self.points.iter()).unwrap_or(BoundingRect {
            lon_min: start.lon(),
            lat_min: start.lat(),
            lon_max: start.lon(),
            lat_max: start.lat(),
        })
    }

    /// Consumes the ring returning its points.
    pub fn into_points(self) -> Vec<GeoPoint2d> {
        self.points
    }
}

impl TryFrom<Vec<GeoPoint2d>> for Ring {
    type Error = GeometryError;

    fn try_from(points: Vec<GeoPoint2d>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Ring> for Vec<GeoPoint2d> {
    fn from(ring: Ring) -> Self {
        ring.points
    }
}

impl AbsDiffEq for Ring {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}
