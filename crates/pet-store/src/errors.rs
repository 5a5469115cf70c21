//! Pet Store error types.
//!
//! All errors map to appropriate HTTP status codes via the `IntoResponse` impl.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Pet Store error type.
///
/// Maps to HTTP status codes:
/// - NotFound: 404 Not Found
/// - Conflict: 409 Conflict
/// - BadRequest: 400 Bad Request
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PetStoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl PetStoreError {
    /// Returns the HTTP status code for this error (for metrics recording).
    pub fn status_code(&self) -> u16 {
        match self {
            PetStoreError::NotFound(_) => 404,
            PetStoreError::Conflict(_) => 409,
            PetStoreError::BadRequest(_) => 400,
        }
    }

    /// Bounded label used for the `outcome` metric dimension.
    pub fn outcome_label(&self) -> &'static str {
        match self {
            PetStoreError::NotFound(_) => "not_found",
            PetStoreError::Conflict(_) => "conflict",
            PetStoreError::BadRequest(_) => "bad_request",
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

impl IntoResponse for PetStoreError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            PetStoreError::NotFound(resource) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", resource.clone())
            }
            PetStoreError::Conflict(reason) => (StatusCode::CONFLICT, "CONFLICT", reason.clone()),
            PetStoreError::BadRequest(reason) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", reason.clone())
            }
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http_body_util::BodyExt;

    async fn read_body_json(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            PetStoreError::NotFound("Pet 7 not found".to_string()).to_string(),
            "Not found: Pet 7 not found"
        );
        assert_eq!(
            PetStoreError::Conflict("Pet 7 already exists".to_string()).to_string(),
            "Conflict: Pet 7 already exists"
        );
        assert_eq!(
            PetStoreError::BadRequest("name must not be empty".to_string()).to_string(),
            "Bad request: name must not be empty"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(PetStoreError::NotFound("x".to_string()).status_code(), 404);
        assert_eq!(PetStoreError::Conflict("x".to_string()).status_code(), 409);
        assert_eq!(PetStoreError::BadRequest("x".to_string()).status_code(), 400);
    }

    #[tokio::test]
    async fn test_into_response_not_found() {
        let response = PetStoreError::NotFound("Pet 999 not found".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body_json = read_body_json(response.into_body()).await;
        assert_eq!(body_json["error"]["code"], "NOT_FOUND");
        assert_eq!(body_json["error"]["message"], "Pet 999 not found");
    }

    #[tokio::test]
    async fn test_into_response_conflict() {
        let response = PetStoreError::Conflict("Pet 1 already exists".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body_json = read_body_json(response.into_body()).await;
        assert_eq!(body_json["error"]["code"], "CONFLICT");
        assert_eq!(body_json["error"]["message"], "Pet 1 already exists");
    }

    #[tokio::test]
    async fn test_into_response_bad_request() {
        let response =
            PetStoreError::BadRequest("name must not be empty".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body_json = read_body_json(response.into_body()).await;
        assert_eq!(body_json["error"]["code"], "BAD_REQUEST");
    }
}
