//! Observability for the Pet Store.
//!
//! Provides metrics definitions, the Prometheus recorder setup and the
//! default log filter.

pub mod metrics;

/// Log filter used when `RUST_LOG` is unset.
///
/// `pet_store` covers module-path targets, `petstore` covers the explicit
/// `petstore.*` event targets.
pub const DEFAULT_LOG_FILTER: &str = "pet_store=debug,petstore=debug,tower_http=debug";

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;
    use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

    #[test]
    fn test_default_log_filter_enables_service_targets() {
        let subscriber = Registry::default().with(EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "petstore.handlers.pets", Level::INFO));
            assert!(tracing::enabled!(target: "petstore.handlers.pets", Level::WARN));
            assert!(tracing::enabled!(target: "petstore.store", Level::DEBUG));
            assert!(tracing::enabled!(target: "pet_store::routes", Level::DEBUG));
            assert!(tracing::enabled!(target: "tower_http::trace", Level::DEBUG));
        });
    }
}
