//! Test server harness for black-box HTTP testing
//!
//! Provides `TestPetStoreServer` for spawning real Pet Store server
//! instances in tests.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use pet_store::config::Config;
use pet_store::models::Pet;
use pet_store::repositories::PetStore;
use pet_store::routes::{self, init_metrics_recorder, AppState};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};
use tokio::task::JoinHandle;

/// Metrics handle shared by every test server in the process.
static TEST_METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// The global recorder can be installed once per process; later servers
/// reuse its handle, and a standalone recorder is used if another test
/// installed one first.
fn test_metrics_handle() -> PrometheusHandle {
    TEST_METRICS_HANDLE
        .get_or_init(|| {
            init_metrics_recorder()
                .unwrap_or_else(|_| PrometheusBuilder::new().build_recorder().handle())
        })
        .clone()
}

/// Test harness for spawning the Pet Store server in black-box tests.
///
/// Each instance owns its own empty (or seeded) store, so tests never
/// observe each other's pets.
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_create_pet() -> Result<(), anyhow::Error> {
///     let server = TestPetStoreServer::spawn().await?;
///     let client = reqwest::Client::new();
///
///     let response = client
///         .post(server.url_for("/api/pets"))
///         .json(&serde_json::json!({"id": 1, "name": "Buddy", "status": "available"}))
///         .send()
///         .await?;
///
///     assert_eq!(response.status(), 201);
///     Ok(())
/// }
/// ```
pub struct TestPetStoreServer {
    addr: SocketAddr,
    store: Arc<PetStore>,
    config: Config,
    _handle: JoinHandle<()>,
}

impl TestPetStoreServer {
    /// Spawn a new test server with an empty store.
    ///
    /// The server binds to a random available port (127.0.0.1:0) and
    /// runs in the background until dropped.
    pub async fn spawn() -> Result<Self, anyhow::Error> {
        Self::spawn_with_pets(Vec::new()).await
    }

    /// Spawn a new test server whose store is seeded with `pets`.
    pub async fn spawn_with_pets(pets: Vec<Pet>) -> Result<Self, anyhow::Error> {
        let vars = HashMap::from([
            ("BIND_ADDRESS".to_string(), "127.0.0.1:0".to_string()),
            ("SERVICE_NAME".to_string(), "pet-store-test".to_string()),
            ("DRAIN_SECONDS".to_string(), "0".to_string()),
        ]);

        let config = Config::from_vars(&vars)
            .map_err(|e| anyhow::anyhow!("Failed to create config: {}", e))?;

        let store = Arc::new(PetStore::with_pets(pets));
        let state = Arc::new(AppState {
            store: store.clone(),
            config: config.clone(),
        });

        // Build routes using the service's real route builder
        let app = routes::build_routes(state, test_metrics_handle());

        let listener = tokio::net::TcpListener::bind(&config.bind_address)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            store,
            config,
            _handle: handle,
        })
    }

    /// Get the base URL of the test server.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the full URL for `path` on the test server.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.url(), path)
    }

    /// Get the socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Direct access to the server's store, for arranging and asserting
    /// state without going through HTTP.
    pub fn store(&self) -> &PetStore {
        &self.store
    }

    /// Get reference to the server configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Drop for TestPetStoreServer {
    fn drop(&mut self) {
        // Abort the HTTP server task so the port is released when the test ends.
        self._handle.abort();
    }
}
