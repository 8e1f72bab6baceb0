//! Router assembly.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Build the router serving `state`. `metrics` backs `/metrics`.
pub fn build_router(state: Arc<AppState>, metrics: PrometheusHandle) -> Router {
    Router::new()
        .route("/", get(handlers::artifacts::index_handler))
        .route("/heatmap.svg", get(handlers::artifacts::heatmap_svg_handler))
        .route("/legend.svg", get(handlers::artifacts::legend_svg_handler))
        .route("/heatmap.png", get(handlers::artifacts::heatmap_png_handler))
        .route("/data.json", get(handlers::artifacts::data_handler))
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        // Middleware
        .layer(Extension(state))
        .layer(Extension(metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
