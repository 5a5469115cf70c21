//! Pet Store models.
//!
//! Contains the `Pet` record and the request/response bodies of the API.

use serde::{Deserialize, Serialize};

/// Maximum pet name length, in characters.
pub const MAX_PET_NAME_LENGTH: usize = 255;

/// A pet record.
///
/// `id` is supplied by the caller on creation. `status` is an opaque label
/// ("available", "sold", ...) and is not checked against a fixed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Caller-supplied identifier, unique within the store.
    pub id: i64,

    /// Free-form display name.
    pub name: String,

    /// Opaque status label.
    pub status: String,
}

impl Pet {
    /// Validate the record shape.
    pub fn validate(&self) -> Result<(), &'static str> {
        validate_name(&self.name)
    }
}

/// Request body for `PUT /pet/{id}` and `PUT /api/pets/{id}`.
///
/// The path id is authoritative. `id` may be omitted from the body; when
/// present it must match the path.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePetRequest {
    #[serde(default)]
    pub id: Option<i64>,

    pub name: String,

    pub status: String,
}

impl UpdatePetRequest {
    /// Validate the request shape against the target id.
    pub fn validate(&self, path_id: i64) -> Result<(), &'static str> {
        if self.id.is_some_and(|body_id| body_id != path_id) {
            return Err("Body id does not match path id");
        }

        validate_name(&self.name)
    }

    /// Build the replacement record for `id`.
    pub fn into_pet(self, id: i64) -> Pet {
        Pet {
            id,
            name: self.name,
            status: self.status,
        }
    }
}

fn validate_name(name: &str) -> Result<(), &'static str> {
    let name = name.trim();

    if name.is_empty() {
        return Err("Pet name must not be empty");
    }

    if name.chars().count() > MAX_PET_NAME_LENGTH {
        return Err("Pet name must be at most 255 characters");
    }

    Ok(())
}

/// Health check response.
///
/// Returned by the `/health` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service health status.
    pub status: String,

    /// Configured service name.
    pub service: String,

    /// Number of pets currently stored.
    pub pets: usize,
}
