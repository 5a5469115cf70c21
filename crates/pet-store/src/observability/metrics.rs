//! Metrics definitions for the Pet Store.
//!
//! All metrics follow Prometheus naming conventions:
//! - `petstore_` prefix
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms
//!
//! # Cardinality
//!
//! Labels are bounded to prevent cardinality explosion:
//! - `method`: 7 values max (GET, POST, PATCH, DELETE, PUT, HEAD, OPTIONS)
//! - `endpoint`: parameterized paths, unknown paths collapse to `/other`
//! - `status`: 3 values (success, error, timeout)
//! - `operation`: list, get, create, update, delete
//! - `outcome`: success plus the `PetStoreError` variants

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Initialize the Prometheus recorder and return the handle used to
/// serve `/metrics`.
///
/// Must be called before any metrics are recorded. HTTP request buckets
/// are aligned with a 200ms p95 target.
///
/// # Errors
///
/// Returns error if the recorder fails to install (e.g., already installed).
pub fn init_metrics_recorder() -> Result<PrometheusHandle, String> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Prefix("petstore_http_request".to_string()),
            &[
                0.001, 0.005, 0.010, 0.025, 0.050, 0.100, 0.200, 0.500, 1.000, 2.000,
            ],
        )
        .map_err(|e| format!("Failed to set HTTP request buckets: {e}"))?
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {e}"))
}

// ============================================================================
// HTTP Request Metrics
// ============================================================================

/// Record HTTP request completion
///
/// Metric: `petstore_http_requests_total`, `petstore_http_request_duration_seconds`
/// Labels: `method`, `endpoint`, `status` / `status_code`
pub fn record_http_request(method: &str, endpoint: &str, status_code: u16, duration: Duration) {
    let normalized_endpoint = normalize_endpoint(endpoint);
    let status = categorize_status_code(status_code);

    histogram!("petstore_http_request_duration_seconds",
        "method" => method.to_string(),
        "endpoint" => normalized_endpoint,
        "status" => status
    )
    .record(duration.as_secs_f64());

    counter!("petstore_http_requests_total",
        "method" => method.to_string(),
        "endpoint" => normalized_endpoint,
        "status_code" => status_code.to_string()
    )
    .increment(1);
}

/// Categorize HTTP status code into success/error/timeout
fn categorize_status_code(status_code: u16) -> &'static str {
    match status_code {
        200..=299 => "success",
        408 | 504 => "timeout",
        _ => "error",
    }
}

/// Normalize an endpoint path to a bounded label.
///
/// Pet ids are replaced with `{id}`.
fn normalize_endpoint(path: &str) -> &'static str {
    match path {
        "/health" => "/health",
        "/metrics" => "/metrics",
        "/pet" => "/pet",
        "/api/pets" => "/api/pets",
        _ => {
            if is_single_segment_under(path, "/pet/") {
                "/pet/{id}"
            } else if is_single_segment_under(path, "/api/pets/") {
                "/api/pets/{id}"
            } else {
                "/other"
            }
        }
    }
}

fn is_single_segment_under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| !rest.is_empty() && !rest.contains('/'))
}

// ============================================================================
// Store Metrics
// ============================================================================

/// Record a pet store operation.
///
/// Metric: `petstore_pet_operations_total`
/// Labels: `operation`, `outcome`
pub fn record_pet_operation(operation: &'static str, outcome: &'static str) {
    counter!("petstore_pet_operations_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
}

/// Set the number of stored pets.
///
/// Metric: `petstore_pets`
pub fn set_pets_stored(count: usize) {
    gauge!("petstore_pets").set(count as f64);
}
