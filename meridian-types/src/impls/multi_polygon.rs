use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::bounding_rect::BoundingRect;
use crate::error::GeometryError;
use crate::impls::polygon::Polygon;

/// A non-empty ordered set of polygons.
///
/// This is the single geometry representation used by the engine: a plain polygon is a multipolygon with exactly
/// one part (see [`MultiPolygon::single`]). The order of parts is preserved by all conversions.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "Vec<Polygon>", into = "Vec<Polygon>")]
pub struct MultiPolygon {
    parts: Vec<Polygon>,
}

impl MultiPolygon {
    /// Creates a new multipolygon. Fails with [`GeometryError::EmptyMultiPolygon`] if `parts` is empty.
    pub fn new(parts: Vec<Polygon>) -> Result<Self, GeometryError> {
        if parts.is_empty() {
            return Err(GeometryError::EmptyMultiPolygon);
        }

        Ok(Self { parts })
    }

    /// Returns reference to the inner polygons.
    pub fn parts(&self) -> &[Polygon] {
        &self.parts
    }

    /// Iterates over polygons.
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.parts.iter()
    }

    /// Number of polygons. Always at least one.
    pub fn polygon_count(&self) -> usize {
        self.parts.len()
    }

    /// First polygon.
    pub fn first(&self) -> &Polygon {
        // Non-empty by construction.
        &self.parts[0]
    }

    /// Returns the polygon if this multipolygon consists of exactly one part.
    pub fn single(&self) -> Option<&Polygon> {
        match self.parts.as_slice() {
            [polygon] => Some(polygon),
            _ => None,
        }
    }

    /// Bounding rectangle of all parts.
    pub fn bounding_rect(&self) -> BoundingRect {
        self.parts
            .iter()
            .map(|p| p.exterior().bounding_rect())
            .reduce(|acc, rect| acc.merge(rect))
            .unwrap_or_else(|| self.first().exterior().bounding_rect())
    }
}

impl From<Polygon> for MultiPolygon {
    fn from(value: Polygon) -> Self {
        Self { parts: vec![value] }
    }
}

impl TryFrom<Vec<Polygon>> for MultiPolygon {
    type Error = GeometryError;

    fn try_from(parts: Vec<Polygon>) -> Result<Self, Self::Error> {
        Self::new(parts)
    }
}

impl From<MultiPolygon> for Vec<Polygon> {
    fn from(value: MultiPolygon) -> Self {
        value.parts
    }
}

impl AbsDiffEq for MultiPolygon {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.parts.len() == other.parts.len()
            && self
                .parts
                .iter()
                .zip(&other.parts)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}
