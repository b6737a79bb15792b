//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the chart logic.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use qtty::Kilograms;
use tracing::debug;

use super::dto::{
    ChartSpec, ControlChangeRequest, ControlId, CorrelationQuery, DashboardLayout,
    DashboardUpdate, HealthResponse, ProportionQuery,
};
use super::error::AppError;
use super::page::DASHBOARD_PAGE;
use super::state::AppState;
use crate::models::{PayloadRange, SiteSelection};
use crate::services::{self, ControlError};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting what was loaded at startup.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let dataset = state.dataset();
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: dataset.len(),
        sites: dataset.sites().len(),
        dataset_checksum: dataset.checksum().map(str::to_string),
        loaded_at: dataset.loaded_at(),
    }))
}

// =============================================================================
// Dashboard page + layout
// =============================================================================

/// GET /
pub async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

/// GET /v1/layout
///
/// Controls, their options and bounds, and the initial selection.
pub async fn get_layout(State(state): State<AppState>) -> HandlerResult<DashboardLayout> {
    Ok(Json(services::dashboard_layout(&state.dataset())))
}

// =============================================================================
// Live dashboard
// =============================================================================

/// GET /v1/charts
///
/// Every output rendered for the current selection.
pub async fn get_charts(State(state): State<AppState>) -> HandlerResult<DashboardUpdate> {
    let update = state.dashboard.lock().render_all();
    Ok(Json(update))
}

/// POST /v1/controls/{control_id}
///
/// Apply a control change and return the outputs bound to that control.
pub async fn post_control_change(
    State(state): State<AppState>,
    Path(control_id): Path<String>,
    Json(request): Json<ControlChangeRequest>,
) -> HandlerResult<DashboardUpdate> {
    let control: ControlId = control_id.parse().map_err(ControlError::from)?;

    let update = {
        let mut dashboard = state.dashboard.lock();
        dashboard.dispatch_json(control, &request.value)?
    };

    debug!(
        control = %control,
        outputs = update.outputs.len(),
        "control change dispatched"
    );

    Ok(Json(update))
}

// =============================================================================
// Stateless chart endpoints
// =============================================================================

/// GET /v1/charts/proportion?site=
pub async fn get_proportion_chart(
    State(state): State<AppState>,
    Query(query): Query<ProportionQuery>,
) -> HandlerResult<ChartSpec> {
    let site = site_from_query(query.site.as_deref());
    Ok(Json(services::proportion_chart(&state.dataset(), &site).into()))
}

/// GET /v1/charts/correlation?site=&payload_min=&payload_max=
///
/// Missing bounds default to the dataset bounds. Values are not clamped; an
/// inverted range simply yields an empty chart.
pub async fn get_correlation_chart(
    State(state): State<AppState>,
    Query(query): Query<CorrelationQuery>,
) -> HandlerResult<ChartSpec> {
    let dataset = state.dataset();
    let bounds = dataset.bounds();
    let lower = finite_or(query.payload_min, bounds.min, "payload_min")?;
    let upper = finite_or(query.payload_max, bounds.max, "payload_max")?;

    let site = site_from_query(query.site.as_deref());
    let chart = services::correlation_chart(&dataset, &site, PayloadRange::new(lower, upper));
    Ok(Json(chart.into()))
}

fn site_from_query(site: Option<&str>) -> SiteSelection {
    site.map(SiteSelection::parse).unwrap_or_default()
}

fn finite_or(value: Option<f64>, default: Kilograms, name: &str) -> Result<Kilograms, AppError> {
    match value {
        None => Ok(default),
        Some(v) if v.is_finite() => Ok(Kilograms::new(v)),
        Some(v) => Err(AppError::BadRequest(format!(
            "{} must be a finite number, got {}",
            name, v
        ))),
    }
}
