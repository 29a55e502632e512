//! End-to-end flow: area of interest in, GeoJSON with the vessels inside it out.

use ::geojson::FeatureCollection;
use meridian_types::MultiPolygon;

use crate::antimeridian::AntimeridianCorrector;
use crate::client::VesselApi;
use crate::error::MeridianError;
use crate::vessels::VesselResponse;
use crate::{geojson, graphql, wkt};

/// Area of interest given to the [`Pipeline`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputDocument {
    /// WKT polygon or multipolygon.
    Wkt(String),
    /// Complete GraphQL vessels query.
    GraphQl(String),
}

/// Result of [`Pipeline::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Query that was sent to the API.
    pub query: String,
    /// Whether the query was generated or rewritten, i.e. differs from the input document.
    pub query_modified: bool,
    /// Raw API response.
    pub response: serde_json::Value,
    /// Area polygon followed by one point per vessel.
    pub collection: FeatureCollection,
}

/// Runs a vessels query for an area of interest and collects the result as GeoJSON.
#[derive(Debug, Clone)]
pub struct Pipeline<A, C> {
    api: A,
    corrector: C,
}

impl<A: VesselApi, C: AntimeridianCorrector> Pipeline<A, C> {
    /// Creates a new pipeline.
    pub fn new(api: A, corrector: C) -> Self {
        Self { api, corrector }
    }

    /// Runs the pipeline.
    ///
    /// A WKT input is always turned into a new query named `operation_name`. A GraphQL input is sent as is, unless
    /// `fix` is set: then its polygon is corrected and the query is rebuilt. The area polygon of the output is the
    /// geometry that was actually queried.
    pub fn run(
        &self,
        input: &InputDocument,
        fix: bool,
        operation_name: &str,
    ) -> Result<PipelineOutput, MeridianError> {
        let (query, geometry, query_modified) = match input {
            InputDocument::Wkt(text) => {
                let geometry = self.fix(wkt::parse(text.trim())?, fix)?;
                let query = graphql::build(&geometry, operation_name)?;
                (query, geometry, true)
            }
            InputDocument::GraphQl(document) if fix => {
                let geometry = self.fix(graphql::extract_polygon(document)?, true)?;
                let query = graphql::build(&geometry, operation_name)?;
                (query, geometry, true)
            }
            InputDocument::GraphQl(document) => {
                let geometry = graphql::extract_polygon(document)?;
                (document.clone(), geometry, false)
            }
        };

        let body = self.api.request(&query)?;
        let response: serde_json::Value = serde_json::from_str(&body)?;
        let vessels = VesselResponse::from_json(&body)?;

        let points = geojson::points_to_features(vessels.nodes());
        log::info!(
            "Query returned {} vessel(s), {} with position",
            vessels.nodes().len(),
            points.len()
        );

        let collection = geojson::assemble_collection(geojson::to_feature(&geometry), points);

        Ok(PipelineOutput {
            query,
            query_modified,
            response,
            collection,
        })
    }

    fn fix(&self, geometry: MultiPolygon, fix: bool) -> Result<MultiPolygon, MeridianError> {
        if fix {
            self.corrector.correct(&geometry)
        } else {
            Ok(geometry)
        }
    }
}
