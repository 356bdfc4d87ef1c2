//! HTTP surface for the county map
//!
//! Every response is a pure derivation of the filter query and the loaded
//! dataset: the resolved field key, the legend entries, or the per-county
//! fill styles. The client keeps the map tiles and interaction; the
//! classification happens here.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use risk_classify::legend::{self, LegendEntry};
use risk_classify::ramp::Ramp;
use risk_classify::resolver::FieldKey;
use risk_classify::scale::ColorScale;
use risk_classify::style::{feature_style, FeatureStyle};
use risk_classify::{resolve, Datasource, Hazard, Rating, ResolveError, Scenario};

use crate::AppState;

/// Filter selection bound from the query string. Defaults mirror the map's
/// initial view: present-day drought risk rating.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FilterQuery {
    #[serde(default = "default_hazard")]
    pub hazard: Hazard,
    #[serde(default = "default_scenario")]
    pub scenario: Scenario,
    #[serde(default = "default_rating")]
    pub rating: Rating,
    #[serde(default = "default_datasource")]
    pub datasource: Datasource,
}

fn default_hazard() -> Hazard {
    Hazard::Drought
}

fn default_scenario() -> Scenario {
    Scenario::Base
}

fn default_rating() -> Rating {
    Rating::RiskRating
}

fn default_datasource() -> Datasource {
    Datasource::L95
}

/// Invalid filter combinations are caller defects, reported as 400s.
#[derive(Debug)]
pub struct ApiError(StatusCode, String);

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        ApiError(StatusCode::BAD_REQUEST, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(json!({ "error": self.1 }))).into_response()
    }
}

#[derive(Serialize)]
pub struct LegendResponse {
    pub field: FieldKey,
    pub entries: Vec<LegendEntry>,
    pub generated_at: String,
}

#[derive(Serialize)]
pub struct ChoroplethResponse {
    pub field: FieldKey,
    /// FeatureStyle per county, keyed by STCOFIPS.
    pub fills: HashMap<String, FeatureStyle>,
    pub county_count: usize,
    pub generated_at: String,
}

/// Resolve the field and build the scale for a filter selection, falling
/// back to the placeholder scale while no dataset is loaded.
fn scale_for(state: &AppState, query: &FilterQuery) -> Result<(FieldKey, ColorScale), ApiError> {
    let field = resolve(query.hazard, query.scenario, query.rating, query.datasource)?;
    let scale = match (*state.dataset).as_ref() {
        Some(dataset) => ColorScale::build(
            query.rating,
            query.hazard,
            &dataset.values_for(&field),
            Ramp::or_rd(),
        ),
        None => ColorScale::placeholder(Ramp::or_rd()),
    };
    Ok((field, scale))
}

pub async fn get_legend(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<LegendResponse>, ApiError> {
    let (field, scale) = scale_for(&state, &query)?;
    Ok(Json(LegendResponse {
        field,
        entries: legend::compose(&scale),
        generated_at: chrono::Utc::now().to_rfc3339(),
    }))
}

pub async fn get_choropleth(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<ChoroplethResponse>, ApiError> {
    let (field, scale) = scale_for(&state, &query)?;

    let fills: HashMap<String, FeatureStyle> = (*state.dataset)
        .as_ref()
        .map(|dataset| {
            dataset
                .counties()
                .map(|(fips, props)| {
                    let style = feature_style(props.get(field.as_str()), &scale, false);
                    (fips.to_string(), style)
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(Json(ChoroplethResponse {
        field,
        county_count: fills.len(),
        fills,
        generated_at: chrono::Utc::now().to_rfc3339(),
    }))
}

/// Raw property bag for the county detail dialog.
pub async fn get_county(
    State(state): State<AppState>,
    Path(fips): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let props = (*state.dataset)
        .as_ref()
        .and_then(|dataset| dataset.county(&fips))
        .ok_or_else(|| ApiError(StatusCode::NOT_FOUND, format!("no county {fips}")))?;
    Ok(Json(serde_json::Value::Object(props.clone())))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
