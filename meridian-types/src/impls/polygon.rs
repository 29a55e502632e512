use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::impls::ring::Ring;

/// Polygon with a single exterior ring. Holes are not represented.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Polygon {
    exterior: Ring,
}

impl Polygon {
    /// Creates a new polygon.
    pub fn new(exterior: Ring) -> Self {
        Self { exterior }
    }

    /// Exterior ring of the polygon.
    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }
}

impl From<Ring> for Polygon {
    fn from(value: Ring) -> Self {
        Self::new(value)
    }
}

impl AbsDiffEq for Polygon {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.exterior.abs_diff_eq(&other.exterior, epsilon)
    }
}
