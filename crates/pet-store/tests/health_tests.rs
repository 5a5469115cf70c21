//! Health and metrics endpoint integration tests.
//!
//! Tests the operational endpoints using the `TestPetStoreServer` harness.

use pet_store_test_utils::TestPetStoreServer;

/// Test that health endpoint returns 200 and healthy status.
#[tokio::test]
async fn test_health_endpoint_returns_200() -> Result<(), anyhow::Error> {
    let server = TestPetStoreServer::spawn().await?;
    let client = reqwest::Client::new();

    let response = client.get(server.url_for("/health")).send().await?;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "pet-store-test");

    Ok(())
}

/// Test that health endpoint returns JSON content type.
#[tokio::test]
async fn test_health_endpoint_returns_json() -> Result<(), anyhow::Error> {
    let server = TestPetStoreServer::spawn().await?;
    let client = reqwest::Client::new();

    let response = client.get(server.url_for("/health")).send().await?;

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    assert!(
        content_type.is_some_and(|ct| ct.contains("application/json")),
        "Expected application/json content type, got {:?}",
        content_type
    );

    Ok(())
}

/// Test that the health pet count tracks creates and deletes.
#[tokio::test]
async fn test_health_pet_count_tracks_store() -> Result<(), anyhow::Error> {
    let server = TestPetStoreServer::spawn().await?;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url_for("/api/pets"))
        .json(&serde_json::json!({"id": 1, "name": "Buddy", "status": "available"}))
        .send()
        .await?;
    assert_eq!(response.status(), 201);

    let body: serde_json::Value = client
        .get(server.url_for("/health"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["pets"], 1);

    let response = client.delete(server.url_for("/api/pets/1")).send().await?;
    assert_eq!(response.status(), 204);

    let body: serde_json::Value = client
        .get(server.url_for("/health"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["pets"], 0);

    Ok(())
}

/// Test that the metrics endpoint is served.
#[tokio::test]
async fn test_metrics_endpoint_returns_200() -> Result<(), anyhow::Error> {
    let server = TestPetStoreServer::spawn().await?;
    let client = reqwest::Client::new();

    let response = client.get(server.url_for("/metrics")).send().await?;

    assert_eq!(response.status(), 200);

    Ok(())
}

/// Test that non-existent routes return 404.
#[tokio::test]
async fn test_unknown_route_returns_404() -> Result<(), anyhow::Error> {
    let server = TestPetStoreServer::spawn().await?;
    let client = reqwest::Client::new();

    let response = client.get(server.url_for("/v2/pets")).send().await?;

    assert_eq!(response.status(), 404);

    Ok(())
}
