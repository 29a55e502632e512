//! Assembling of the GeoJSON output: the area polygon followed by the vessel positions.

use ::geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use meridian_types::geo::GeoPoint;
use meridian_types::geojson::position;
use meridian_types::MultiPolygon;

use crate::vessels::VesselNode;

/// Wraps the geometry into a feature with a `MultiPolygon` geometry and empty properties.
pub fn to_feature(geometry: &MultiPolygon) -> Feature {
    feature(Geometry::from(geometry))
}

/// Creates a point feature for every record with a known position.
///
/// Records without a position are skipped.
pub fn points_to_features<'a>(records: impl IntoIterator<Item = &'a VesselNode>) -> Vec<Feature> {
    let mut skipped = 0;
    let features: Vec<_> = records
        .into_iter()
        .filter_map(|record| {
            let point = record.position();
            if point.is_none() {
                skipped += 1;
            }

            point
        })
        .map(|point| point_feature(&point))
        .collect();

    if skipped > 0 {
        log::debug!("Skipped {skipped} vessel record(s) without position");
    }

    features
}

/// Creates a point feature with empty properties. Coordinates are in `[lon, lat]` order.
pub fn point_feature(point: &impl GeoPoint<Num = f64>) -> Feature {
    feature(Geometry::new(Value::Point(position(point))))
}

/// Builds a collection with the polygon feature first and the point features after it.
pub fn assemble_collection(polygon: Feature, points: Vec<Feature>) -> FeatureCollection {
    let mut features = Vec::with_capacity(points.len() + 1);
    features.push(polygon);
    features.extend(points);

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn feature(geometry: Geometry) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(JsonObject::new()),
        foreign_members: None,
    }
}
