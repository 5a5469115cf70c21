//! Prometheus metrics endpoint handler.
//!
//! `/metrics` is unauthenticated so Prometheus can scrape it. Only
//! operational data with bounded cardinality labels is exposed.

use axum::{extract::State, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;

/// Handler for GET /metrics
///
/// Returns Prometheus-formatted metrics for scraping:
/// ```text
/// # TYPE petstore_http_requests_total counter
/// petstore_http_requests_total{method="GET",endpoint="/api/pets/{id}",status_code="200"} 42
/// ```
#[tracing::instrument(skip_all, name = "petstore.metrics.scrape")]
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    handle.render()
}
