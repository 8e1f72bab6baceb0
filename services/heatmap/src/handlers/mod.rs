//! HTTP request handlers.

pub mod artifacts;
pub mod health;

use metrics::counter;

/// Count a request against its route.
pub(crate) fn record_request(route: &'static str) {
    counter!("heatmap_http_requests_total", "route" => route).increment(1);
}
