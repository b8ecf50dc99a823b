//! JSON endpoints: control layout, callback dispatch, single figures, health.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use launchdash_analysis::reactive::{normalize_selection, OutputUpdates};
use launchdash_analysis::{Figure, InputId, OutputId};
use launchdash_core::{PayloadRange, Selection, SiteFilter};

use crate::errors::{ServerError, ServerResult};
use crate::layout::DashboardLayout;
use crate::AppState;

/// An input change reported by the page, with the full current selection.
#[derive(Debug, Deserialize)]
pub struct CallbackRequest {
    pub input: String,
    pub site: SiteFilter,
    pub payload_range: PayloadRange,
}

#[derive(Debug, Serialize)]
pub struct CallbackResponse {
    pub outputs: OutputUpdates,
}

/// Optional selection overrides for a single figure; absent values fall back
/// to the page defaults.
#[derive(Debug, Default, Deserialize)]
pub struct FigureQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub records: usize,
    pub sites: usize,
}

pub async fn layout(State(state): State<AppState>) -> Json<DashboardLayout> {
    Json(state.layout().clone())
}

/// Recompute every output that depends on the changed input.
pub async fn callback(
    State(state): State<AppState>,
    Json(body): Json<CallbackRequest>,
) -> ServerResult<Json<CallbackResponse>> {
    let input: InputId = body.input.parse().map_err(ServerError::UnknownInput)?;
    let selection = normalize_selection(
        Selection::new(body.site, body.payload_range),
        &state.config().slider,
    );

    let outputs = state
        .dispatcher()
        .dispatch(state.dataset(), input, &selection);
    Ok(Json(CallbackResponse { outputs }))
}

/// Render one output for a selection given as query parameters.
pub async fn figure(
    State(state): State<AppState>,
    Path(output): Path<String>,
    Query(query): Query<FigureQuery>,
) -> ServerResult<Json<Figure>> {
    let output: OutputId = output.parse().map_err(ServerError::UnknownOutput)?;

    let defaults = state.layout().default_selection();
    let site = query
        .site
        .as_deref()
        .map(SiteFilter::from_value)
        .unwrap_or(defaults.site);
    let range = PayloadRange::new(
        query.low.unwrap_or(defaults.payload_range.low),
        query.high.unwrap_or(defaults.payload_range.high),
    );
    let selection = normalize_selection(Selection::new(site, range), &state.config().slider);

    state
        .dispatcher()
        .render(state.dataset(), output, &selection)
        .map(Json)
        .ok_or_else(|| ServerError::UnknownOutput(output.to_string()))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        records: state.dataset().len(),
        sites: state.dataset().options().sites().len(),
    })
}
