//! Handlers serving the pre-rendered heatmap artifacts.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use super::record_request;
use crate::state::AppState;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";
pub const PNG_CONTENT_TYPE: &str = "image/png";
pub const JSON_CONTENT_TYPE: &str = "application/json";

fn artifact(content_type: &'static str, body: Bytes) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        body,
    )
        .into_response()
}

/// GET / - HTML page with tooltip
pub async fn index_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    record_request("/");
    artifact(HTML_CONTENT_TYPE, state.html.clone())
}

/// GET /heatmap.svg
pub async fn heatmap_svg_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    record_request("/heatmap.svg");
    artifact(SVG_CONTENT_TYPE, state.svg.clone())
}

/// GET /legend.svg
pub async fn legend_svg_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    record_request("/legend.svg");
    artifact(SVG_CONTENT_TYPE, state.legend_svg.clone())
}

/// GET /heatmap.png
pub async fn heatmap_png_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    record_request("/heatmap.png");
    artifact(PNG_CONTENT_TYPE, state.png.clone())
}

/// GET /data.json - the dataset as loaded
pub async fn data_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    record_request("/data.json");
    artifact(JSON_CONTENT_TYPE, state.data_json.clone())
}
