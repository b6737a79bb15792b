//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::controls::{GET_CHARTS, POST_CONTROL_CHANGE};
use crate::routes::correlation::GET_CORRELATION_CHART;
use crate::routes::layout::GET_LAYOUT;
use crate::routes::proportion::GET_PROPORTION_CHART;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Read-only JSON surface, so any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route(GET_LAYOUT, get(handlers::get_layout))
        .route(GET_CHARTS, get(handlers::get_charts))
        .route(GET_PROPORTION_CHART, get(handlers::get_proportion_chart))
        .route(GET_CORRELATION_CHART, get(handlers::get_correlation_chart))
        .route(POST_CONTROL_CHANGE, post(handlers::post_control_change));

    Router::new()
        .route("/", get(handlers::dashboard_page))
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
