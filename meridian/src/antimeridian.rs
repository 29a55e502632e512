//! Splitting of polygons that cross the antimeridian (±180° longitude).
//!
//! A polygon drawn across the antimeridian, e.g. `POLYGON((170 10, -170 10, -170 20, 170 20, 170 10))`, is
//! interpreted by planar consumers as a polygon spanning almost the whole globe in the opposite direction. The
//! [`SplitCorrector`] cuts such polygons along the antimeridian into several parts, one per side, so that every
//! part is valid in plain lon/lat coordinates.
//!
//! The output of a corrector may have more polygons than its input. Consumers must not assume the arity is kept.

use geo::{Area, BooleanOps, MapCoordsInPlace, Rect};
use geo_types::{coord, Coord, LineString};
use meridian_types::bounding_rect::BoundingRect;
use meridian_types::geo::GeoPoint;
use meridian_types::{MultiPolygon, Polygon, Ring};

use crate::error::MeridianError;

/// Longitude jump between two consecutive points that is treated as crossing the antimeridian.
const CROSSING_THRESHOLD: f64 = 180.0;

/// Upper bound on the number of 360° windows a single unwrapped ring may span.
const MAX_WINDOWS: i64 = 16;

/// Corrects geometries crossing the antimeridian.
///
/// Implementations must be idempotent: correcting an already corrected geometry returns an equivalent geometry.
///
/// Any function `Fn(&MultiPolygon) -> Result<MultiPolygon, MeridianError>` is a corrector too, which is handy for
/// plugging in an external implementation.
pub trait AntimeridianCorrector {
    /// Returns the corrected geometry.
    fn correct(&self, geometry: &MultiPolygon) -> Result<MultiPolygon, MeridianError>;
}

impl<F> AntimeridianCorrector for F
where
    F: Fn(&MultiPolygon) -> Result<MultiPolygon, MeridianError>,
{
    fn correct(&self, geometry: &MultiPolygon) -> Result<MultiPolygon, MeridianError> {
        self(geometry)
    }
}

/// Default corrector. Splits crossing rings along the antimeridian.
///
/// Rings that do not cross the antimeridian are returned unchanged. A crossing ring is unwrapped into continuous
/// longitudes, clipped by every 360° wide window it touches and each clipped part is moved back into
/// `[-180, 180]`. Parts are ordered from west to east in the unwrapped space.
///
/// Rings enclosing a pole cannot be unwrapped into a closed ring. Such rings are returned unchanged with a warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct SplitCorrector;

impl AntimeridianCorrector for SplitCorrector {
    fn correct(&self, geometry: &MultiPolygon) -> Result<MultiPolygon, MeridianError> {
        let mut parts = Vec::with_capacity(geometry.polygon_count());
        for polygon in geometry.polygons() {
            parts.extend(split_polygon(polygon)?);
        }

        if parts.len() != geometry.polygon_count() {
            log::debug!(
                "Antimeridian correction split {} polygon(s) into {}",
                geometry.polygon_count(),
                parts.len()
            );
        }

        Ok(MultiPolygon::new(parts)?)
    }
}

/// Returns true if any segment of the ring jumps over the antimeridian.
pub fn crosses_antimeridian(ring: &Ring) -> bool {
    ring.points()
        .windows(2)
        .any(|w| (w[1].lon() - w[0].lon()).abs() > CROSSING_THRESHOLD)
}

fn split_polygon(polygon: &Polygon) -> Result<Vec<Polygon>, MeridianError> {
    let ring = polygon.exterior();
    if !crosses_antimeridian(ring) {
        return Ok(vec![polygon.clone()]);
    }

    let unwrapped = unwrap_longitudes(ring);
    if unwrapped.first() != unwrapped.last() {
        log::warn!(
            "Ring encloses a pole and cannot be split along the antimeridian, keeping it as is"
        );
        return Ok(vec![polygon.clone()]);
    }

    let Some(rect) = BoundingRect::from_points(unwrapped.iter()) else {
        return Ok(vec![polygon.clone()]);
    };

    let unwrapped = geo_types::Polygon::new(LineString::new(unwrapped), vec![]);
    let first_window = ((rect.lon_min + 180.0) / 360.0).floor() as i64;
    let last_window = ((rect.lon_max - 180.0) / 360.0).ceil() as i64;
    if last_window.saturating_sub(first_window) > MAX_WINDOWS {
        return Err(MeridianError::Correction(format!(
            "ring spans longitudes from {} to {} after unwrapping",
            rect.lon_min, rect.lon_max
        )));
    }

    let mut parts = vec![];
    for window in first_window..=last_window {
        let offset = 360.0 * window as f64;
        let clip = Rect::new(
            coord! { x: offset - 180.0, y: rect.lat_min - 1.0 },
            coord! { x: offset + 180.0, y: rect.lat_max + 1.0 },
        )
        .to_polygon();

        for mut part in unwrapped.intersection(&clip) {
            if part.unsigned_area() == 0.0 {
                continue;
            }

            part.map_coords_in_place(|c| coord! {
                x: (c.x - offset).clamp(-180.0, 180.0),
                y: c.y,
            });
            parts.push(Polygon::try_from(&part).map_err(|e| {
                MeridianError::Correction(format!("invalid part after splitting: {e}"))
            })?);
        }
    }

    if parts.is_empty() {
        log::warn!("Splitting along the antimeridian produced no parts, keeping the ring as is");
        return Ok(vec![polygon.clone()]);
    }

    Ok(parts)
}

/// Shifts longitudes by multiples of 360° so that no segment jumps over the antimeridian.
fn unwrap_longitudes(ring: &Ring) -> Vec<Coord<f64>> {
    let mut offset = 0.0;
    let mut prev_lon: Option<f64> = None;

    ring.iter_points()
        .map(|point| {
            if let Some(prev) = prev_lon {
                let delta = point.lon() - prev;
                if delta > CROSSING_THRESHOLD {
                    offset -= 360.0;
                } else if delta < -CROSSING_THRESHOLD {
                    offset += 360.0;
                }
            }
            prev_lon = Some(point.lon());

            Coord::from(point.shift_lon(offset))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use meridian_types::lonlat;

    use super::*;
    use crate::wkt;

    #[test]
    fn splits_crossing_polygon() {
        let geometry = wkt::parse("POLYGON((170 10, -170 10, -170 20, 170 20, 170 10))").unwrap();
        let corrected = SplitCorrector.correct(&geometry).unwrap();

        assert_eq!(corrected.polygon_count(), 2);

        let east = corrected.parts()[0].exterior().bounding_rect();
        assert_abs_diff_eq!(east.lon_min, 170.0, epsilon = 1e-9);
        assert_abs_diff_eq!(east.lon_max, 180.0, epsilon = 1e-9);

        let west = corrected.parts()[1].exterior().bounding_rect();
        assert_abs_diff_eq!(west.lon_min, -180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(west.lon_max, -170.0, epsilon = 1e-9);

        for polygon in corrected.polygons() {
            let ring = polygon.exterior();
            assert!(!crosses_antimeridian(ring));
            assert_eq!(ring.points().first(), ring.points().last());
            assert!(ring.bounding_rect().is_within_lon_bounds());
            assert_abs_diff_eq!(
                geo_types::Polygon::from(polygon).unsigned_area(),
                100.0,
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn splits_polygon_drawn_westwards() {
        let geometry =
            wkt::parse("POLYGON((-175 -5, 175 -5, 175 5, -175 5, -175 -5))").unwrap();
        let corrected = SplitCorrector.correct(&geometry).unwrap();

        assert_eq!(corrected.polygon_count(), 2);
        let rects: Vec<_> = corrected
            .polygons()
            .map(|p| p.exterior().bounding_rect())
            .collect();
        assert_abs_diff_eq!(rects[0].lon_min, 175.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rects[0].lon_max, 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rects[1].lon_min, -180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rects[1].lon_max, -175.0, epsilon = 1e-9);
    }

    #[test]
    fn keeps_non_crossing_polygon() {
        let geometry = wkt::parse("POLYGON((0 0, 1 0, 1 1, 0 1, 0 0))").unwrap();
        assert_eq!(SplitCorrector.correct(&geometry).unwrap(), geometry);

        let touching = wkt::parse(
            "MULTIPOLYGON(((170 10, 180 10, 180 20, 170 20, 170 10)), \
             ((-180 10, -170 10, -170 20, -180 20, -180 10)))",
        )
        .unwrap();
        assert_eq!(SplitCorrector.correct(&touching).unwrap(), touching);
    }

    #[test]
    fn correction_is_idempotent() {
        for text in [
            "POLYGON((170 10, -170 10, -170 20, 170 20, 170 10))",
            "POLYGON((160 -30, -150 -30, -170 40, 175 10, 160 -30))",
            "MULTIPOLYGON(((0 0, 1 0, 1 1, 0 0)), ((179 0, -179 0, -179 1, 179 1, 179 0)))",
        ] {
            let geometry = wkt::parse(text).unwrap();
            let once = SplitCorrector.correct(&geometry).unwrap();
            let twice = SplitCorrector.correct(&once).unwrap();
            assert_abs_diff_eq!(once, twice, epsilon = 1e-9);
        }
    }

    #[test]
    fn keeps_parts_order() {
        let geometry = wkt::parse(
            "MULTIPOLYGON(((0 0, 1 0, 1 1, 0 0)), \
             ((179 0, -179 0, -179 1, 179 1, 179 0)), \
             ((5 5, 6 5, 6 6, 5 5)))",
        )
        .unwrap();
        let corrected = SplitCorrector.correct(&geometry).unwrap();

        assert_eq!(corrected.polygon_count(), 4);
        assert_eq!(corrected.parts()[0], geometry.parts()[0]);
        assert_eq!(corrected.parts()[3], geometry.parts()[2]);
    }

    #[test]
    fn polar_ring_is_kept() {
        let geometry = wkt::parse(
            "POLYGON((-180 80, -90 80, 0 80, 90 80, 180 80, -90 85, -180 80))",
        )
        .unwrap();
        assert!(crosses_antimeridian(geometry.first().exterior()));
        assert_eq!(SplitCorrector.correct(&geometry).unwrap(), geometry);
    }

    #[test]
    fn far_longitudes_are_rejected() {
        let geometry = MultiPolygon::from(Polygon::new(
            Ring::new(vec![
                lonlat!(0.0, 0.0),
                lonlat!(1e12, 0.0),
                lonlat!(1e12, 1.0),
                lonlat!(0.0, 1.0),
            ])
            .unwrap(),
        ));
        assert!(matches!(
            SplitCorrector.correct(&geometry),
            Err(MeridianError::Correction(_))
        ));
    }

    #[test]
    fn closure_corrector() {
        let identity = |g: &MultiPolygon| -> Result<MultiPolygon, MeridianError> { Ok(g.clone()) };
        let geometry = MultiPolygon::from(Polygon::new(
            Ring::new(vec![
                lonlat!(170.0, 10.0),
                lonlat!(-170.0, 10.0),
                lonlat!(-170.0, 20.0),
                lonlat!(170.0, 20.0),
            ])
            .unwrap(),
        ));
        assert_eq!(identity.correct(&geometry).unwrap(), geometry);
    }
}
