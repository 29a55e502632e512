//! Response of the vessels query.

use meridian_types::geo::{GeoPoint, GeoPoint2d};
use serde::Deserialize;

use crate::error::MeridianError;

/// Parsed `data.vessels` part of the vessel API response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VesselResponse {
    data: ResponseData,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct ResponseData {
    vessels: Vessels,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Vessels {
    #[serde(default)]
    total_count: Option<TotalCount>,
    nodes: Vec<VesselNode>,
}

/// Total number of vessels matching the query, as reported by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TotalCount {
    /// `EQUAL` or `GREATER_OR_EQUAL`.
    #[serde(default)]
    pub relation: Option<String>,
    /// Count value.
    pub value: u64,
}

/// Single vessel record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselNode {
    /// Last known position of the vessel. Vessels that never reported a position have none.
    #[serde(default)]
    pub last_position_update: Option<PositionUpdate>,
}

/// Position report.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PositionUpdate {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl VesselResponse {
    /// Parses the response text.
    ///
    /// Fails with [`MeridianError::InvalidResponse`] if the text is not JSON or has no `data.vessels.nodes` array.
    pub fn from_json(text: &str) -> Result<Self, MeridianError> {
        let response: Self = serde_json::from_str(text)?;
        log::debug!("Vessel response contains {} node(s)", response.nodes().len());
        Ok(response)
    }

    /// Vessel records in the order returned by the API.
    pub fn nodes(&self) -> &[VesselNode] {
        &self.data.vessels.nodes
    }

    /// Total count reported by the API, if it was requested.
    pub fn total_count(&self) -> Option<&TotalCount> {
        self.data.vessels.total_count.as_ref()
    }
}

impl VesselNode {
    /// Last known position as a point.
    pub fn position(&self) -> Option<GeoPoint2d> {
        self.last_position_update.map(|p| GeoPoint2d::from(&p))
    }
}

impl GeoPoint for PositionUpdate {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.latitude
    }

    fn lon(&self) -> f64 {
        self.longitude
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use meridian_types::lonlat;

    use super::*;

    const RESPONSE: &str = r#"{
        "data": {
            "vessels": {
                "pageInfo": { "hasNextPage": false, "endCursor": "abc" },
                "totalCount": { "relation": "EQUAL", "value": 3 },
                "nodes": [
                    { "lastPositionUpdate": { "latitude": 15.5, "longitude": 175.25 } },
                    { "lastPositionUpdate": null },
                    { "lastPositionUpdate": { "latitude": -1, "longitude": -179 } }
                ]
            }
        }
    }"#;

    #[test]
    fn parses_response() {
        let response = VesselResponse::from_json(RESPONSE).unwrap();
        assert_eq!(response.nodes().len(), 3);
        assert_eq!(response.nodes()[0].position(), Some(lonlat!(175.25, 15.5)));
        assert_eq!(response.nodes()[1].position(), None);
        assert_eq!(response.nodes()[2].position(), Some(lonlat!(-179.0, -1.0)));

        let count = response.total_count().unwrap();
        assert_eq!(count.value, 3);
        assert_eq!(count.relation.as_deref(), Some("EQUAL"));
    }

    #[test]
    fn missing_position_field() {
        let response =
            VesselResponse::from_json(r#"{"data": {"vessels": {"nodes": [{}]}}}"#).unwrap();
        assert_eq!(response.nodes()[0].last_position_update, None);
        assert!(response.total_count().is_none());
    }

    #[test]
    fn invalid_response() {
        assert_matches!(
            VesselResponse::from_json("not json"),
            Err(MeridianError::InvalidResponse(_))
        );
        assert_matches!(
            VesselResponse::from_json(r#"{"data": {"vessels": {}}}"#),
            Err(MeridianError::InvalidResponse(_))
        );
        assert_matches!(
            VesselResponse::from_json(r#"{"errors": [{"message": "unauthorized"}]}"#),
            Err(MeridianError::InvalidResponse(_))
        );
    }
}
