use std::fmt::Write;

use meridian_types::geo::GeoPoint;
use meridian_types::{MultiPolygon, Ring};

use super::{MULTIPOLYGON, POLYGON};

pub(crate) fn write_geometry(out: &mut String, geometry: &MultiPolygon) {
    match geometry.single() {
        Some(polygon) => {
            out.push_str(POLYGON);
            out.push('(');
            write_ring(out, polygon.exterior());
            out.push(')');
        }
        None => {
            out.push_str(MULTIPOLYGON);
            out.push('(');
            for (index, polygon) in geometry.polygons().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                out.push('(');
                write_ring(out, polygon.exterior());
                out.push(')');
            }
            out.push(')');
        }
    }
}

fn write_ring(out: &mut String, ring: &Ring) {
    out.push('(');
    for (index, point) in ring.iter_points().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        // Writing into a `String` never fails.
        let _ = write!(out, "{} {}", point.lon(), point.lat());
    }
    out.push(')');
}
