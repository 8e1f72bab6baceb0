//! Router tests: each route answers with the expected content type and body.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use heatmap::config::HeatmapConfig;
use heatmap::server::build_router;
use heatmap::state::AppState;
use heatmap_common::Dataset;
use metrics_exporter_prometheus::PrometheusBuilder;
use test_utils::sample_dataset;
use tower::ServiceExt;

async fn test_router() -> Router {
    let state = AppState::new(sample_dataset(), &HeatmapConfig::default())
        .await
        .unwrap();
    let handle = PrometheusBuilder::new().build_recorder().handle();
    build_router(Arc::new(state), handle)
}

async fn get(router: Router, uri: &str) -> (StatusCode, String, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

#[tokio::test]
async fn test_index_is_html_page() {
    let (status, content_type, body) = get(test_router().await, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/html; charset=utf-8");

    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<div id=\"tooltip\"></div>"));
    assert_eq!(html.matches("class=\"cell\"").count(), sample_dataset().len());
}

#[tokio::test]
async fn test_heatmap_svg() {
    let (status, content_type, body) = get(test_router().await, "/heatmap.svg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "image/svg+xml");

    let svg = String::from_utf8(body).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("id=\"y-axis-right\""));
}

#[tokio::test]
async fn test_legend_svg() {
    let (status, content_type, body) = get(test_router().await, "/legend.svg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "image/svg+xml");
    assert!(String::from_utf8(body).unwrap().contains("id=\"legend\""));
}

#[tokio::test]
async fn test_heatmap_png() {
    let (status, content_type, body) = get(test_router().await, "/heatmap.png").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "image/png");
    assert_eq!(&body[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
}

#[tokio::test]
async fn test_data_round_trips() {
    let (status, content_type, body) = get(test_router().await, "/data.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "application/json");

    let dataset = Dataset::from_slice(&body).unwrap();
    assert_eq!(dataset, sample_dataset());
}

#[tokio::test]
async fn test_health() {
    let (status, content_type, body) = get(test_router().await, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "application/json");

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["records"], sample_dataset().len());
}

#[tokio::test]
async fn test_metrics_is_prometheus_text() {
    let (status, content_type, _) = get(test_router().await, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/plain; version=0.0.4");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, _, _) = get(test_router().await, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_dataset_still_serves() {
    let state = AppState::new(test_utils::degenerate::empty(), &HeatmapConfig::default())
        .await
        .unwrap();
    let handle = PrometheusBuilder::new().build_recorder().handle();
    let router = build_router(Arc::new(state), handle);

    let (status, _, body) = get(router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("no data"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_state_png_rendered_at_configured_scale() {
    let mut config = HeatmapConfig::default();
    config.output.png_scale = 0.5;
    let state = AppState::new(sample_dataset(), &config).await.unwrap();

    let png = &state.png;
    let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
    let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
    assert_eq!((width, height), (600, 300));
}
