//! Health check handler.

use crate::models::HealthResponse;
use crate::routes::AppState;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use tracing::instrument;

/// Health check handler.
///
/// The store is in memory, so the service is healthy whenever it can
/// answer. The current pet count is included for quick inspection.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "pet-store",
///   "pets": 3
/// }
/// ```
#[instrument(skip_all, name = "petstore.health.check")]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.service_name.clone(),
        pets: state.store.len().await,
    })
}
