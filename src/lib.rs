//! NetworkSim Metrics Exporter
//!
//! Serves the simulation metrics snapshot, written to disk by the simulator,
//! to Prometheus scrapers.

pub mod api;
pub mod config;
pub mod error;
pub mod snapshot;

use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;

use crate::api::AppState;
use crate::snapshot::METRICS_PATH;

/// Create the application router with the given state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Method is not inspected: every verb on the metrics path scrapes
        .route(METRICS_PATH, any(api::metrics::metrics_handler))
        .fallback(api::metrics::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
