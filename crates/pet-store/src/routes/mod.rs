//! HTTP routes for the Pet Store.
//!
//! Defines the Axum router and application state.

use crate::config::Config;
use crate::handlers;
use crate::middleware::http_metrics_middleware;
use crate::repositories::PetStore;
use axum::{middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub use crate::observability::metrics::init_metrics_recorder;

/// Base paths under which the pet handlers are mounted.
pub const PET_BASE_PATHS: [&str; 2] = ["/pet", "/api/pets"];

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The pet store. Owned here and shared with every handler.
    pub store: Arc<PetStore>,

    /// Service configuration.
    pub config: Config,
}

/// Pet routes mounted under `base`.
fn pet_routes(base: &str) -> Router<Arc<AppState>> {
    Router::new()
        .route(base, get(handlers::list_pets).post(handlers::create_pet))
        .route(
            &format!("{base}/:id"),
            get(handlers::get_pet)
                .put(handlers::update_pet)
                .delete(handlers::delete_pet),
        )
}

/// Build the application routes.
///
/// Creates an Axum router with:
/// - `/health` - Liveness probe
/// - `/metrics` - Prometheus metrics endpoint
/// - `/pet`, `/pet/:id` - Pet CRUD
/// - `/api/pets`, `/api/pets/:id` - Pet CRUD (same store)
/// - TraceLayer for request logging
/// - HTTP metrics middleware
/// - Request timeout from configuration
pub fn build_routes(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let request_timeout = Duration::from_secs(state.config.request_timeout_seconds);

    let app_routes = PET_BASE_PATHS
        .iter()
        .fold(
            Router::new().route("/health", get(handlers::health_check)),
            |router, base| router.merge(pet_routes(base)),
        )
        .with_state(state);

    let metrics_routes = Router::new()
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(metrics_handle);

    // Layer order (bottom-to-top execution):
    // 1. TimeoutLayer - Timeout the request (innermost)
    // 2. TraceLayer - Log request details
    // 3. http_metrics_middleware - Record ALL responses (outermost)
    app_routes
        .merge(metrics_routes)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(http_metrics_middleware))
}
