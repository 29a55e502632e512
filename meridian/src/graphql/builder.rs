use std::fmt::Write;

use lazy_static::lazy_static;
use meridian_types::geo::GeoPoint;
use meridian_types::{MultiPolygon, Ring};
use regex::Regex;

use crate::error::MeridianError;

/// Operation name used when none is given explicitly.
pub const DEFAULT_OPERATION_NAME: &str = "VesselsInArea";

const COORDINATES_INDENT: &str = "                    ";

lazy_static! {
    static ref OPERATION_NAME: Regex = Regex::new("^[_A-Za-z][_0-9A-Za-z]*$").expect("valid regex");
}

/// Shape of the `areaOfInterest` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AreaFilter {
    Polygon,
    MultiPolygon,
}

impl AreaFilter {
    fn for_geometry(geometry: &MultiPolygon) -> Self {
        match geometry.single() {
            Some(_) => Self::Polygon,
            None => Self::MultiPolygon,
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Self::Polygon => "polygon",
            Self::MultiPolygon => "multiPolygon",
        }
    }

    fn geometry_type(&self) -> &'static str {
        match self {
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
        }
    }
}

/// Builds a vessels query selecting everything inside the geometry.
///
/// A single polygon is sent as a `polygon` filter, two or more as a `multiPolygon` filter. The operation name must
/// be a valid GraphQL name.
pub fn build(geometry: &MultiPolygon, operation_name: &str) -> Result<String, MeridianError> {
    if !OPERATION_NAME.is_match(operation_name) {
        return Err(MeridianError::InvalidOperationName(
            operation_name.to_string(),
        ));
    }

    let filter = AreaFilter::for_geometry(geometry);
    log::debug!(
        "Building query {operation_name} with {} filter of {} polygon(s)",
        filter.key(),
        geometry.polygon_count()
    );

    let key = filter.key();
    let geometry_type = filter.geometry_type();
    let coordinates = coordinates(geometry, filter);

    Ok(format!(
        r#"query {operation_name} {{
    vessels(
        first: 1000,
        areaOfInterest: {{
            {key}: {{
                type: "{geometry_type}"
                coordinates: [
{COORDINATES_INDENT}{coordinates}
                ]
            }}
        }}
    ) {{
        pageInfo {{
            hasNextPage
            endCursor
        }}
        totalCount {{
            relation
            value
        }}
        nodes {{
            lastPositionUpdate {{
                latitude
                longitude
            }}
        }}
    }}
}}
"#
    ))
}

fn coordinates(geometry: &MultiPolygon, filter: AreaFilter) -> String {
    let mut out = String::new();
    for (index, polygon) in geometry.polygons().enumerate() {
        if index > 0 {
            out.push_str(",\n");
            out.push_str(COORDINATES_INDENT);
        }

        match filter {
            AreaFilter::Polygon => write_ring(&mut out, polygon.exterior()),
            AreaFilter::MultiPolygon => {
                out.push('[');
                write_ring(&mut out, polygon.exterior());
                out.push(']');
            }
        }
    }

    out
}

fn write_ring(out: &mut String, ring: &Ring) {
    out.push('[');
    for (index, point) in ring.iter_points().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        // `Debug` keeps the decimal point (`170.0`), so the values are GraphQL floats.
        let _ = write!(out, "[{:?}, {:?}]", point.lon(), point.lat());
    }
    out.push(']');
}
