//! Pet handlers.
//!
//! Every handler is mounted under both path families, `/pet` and
//! `/api/pets`, and both operate on the same store:
//!
//! - `GET {base}` - List pets
//! - `GET {base}/{id}` - Get a pet
//! - `POST {base}` - Create a pet (201 + `Location`)
//! - `PUT {base}/{id}` - Replace a pet's name and status
//! - `DELETE {base}/{id}` - Delete a pet (204)
//!
//! A non-integer `{id}` is rejected by the `Path` extractor with 400 before
//! the handler runs.

use crate::errors::PetStoreError;
use crate::models::{Pet, UpdatePetRequest};
use crate::observability::metrics::record_pet_operation;
use crate::routes::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode, Uri},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Record the outcome of a store operation and log client errors.
fn observe<T>(
    operation: &'static str,
    result: Result<T, PetStoreError>,
) -> Result<T, PetStoreError> {
    match &result {
        Ok(_) => record_pet_operation(operation, "success"),
        Err(e) => {
            record_pet_operation(operation, e.outcome_label());
            warn!(
                target: "petstore.handlers.pets",
                operation,
                status_code = e.status_code(),
                error = %e,
                "Pet operation rejected"
            );
        }
    }
    result
}

/// Handler for GET /pet and GET /api/pets
///
/// Returns every stored pet in insertion order.
#[instrument(skip_all, name = "petstore.pets.list")]
pub async fn list_pets(State(state): State<Arc<AppState>>) -> Json<Vec<Pet>> {
    let pets = state.store.list().await;
    record_pet_operation("list", "success");
    Json(pets)
}

/// Handler for GET /pet/{id} and GET /api/pets/{id}
///
/// # Response
///
/// - 200 OK: Pet body
/// - 404 Not Found: No pet with this id
#[instrument(skip_all, name = "petstore.pets.get", fields(pet_id = id))]
pub async fn get_pet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Pet>, PetStoreError> {
    observe("get", state.store.get(id).await).map(Json)
}

/// Handler for POST /pet and POST /api/pets
///
/// # Request Body
///
/// ```json
/// { "id": 12345, "name": "Bobby", "status": "available" }
/// ```
///
/// # Response
///
/// - 201 Created: Stored pet, `Location` points at its GET path
/// - 400 Bad Request: Blank or overlong name
/// - 409 Conflict: A pet with this id already exists
#[instrument(skip_all, name = "petstore.pets.create", fields(pet_id = pet.id))]
pub async fn create_pet(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Json(pet): Json<Pet>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Pet>), PetStoreError> {
    let created = observe("create", state.store.create(pet).await)?;
    let location = format!("{}/{}", uri.path(), created.id);

    info!(
        target: "petstore.handlers.pets",
        pet_id = created.id,
        location = %location,
        "Pet created"
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Handler for PUT /pet/{id} and PUT /api/pets/{id}
///
/// The body carries `name` and `status`; its `id` may be omitted and
/// must equal the path id when present.
///
/// # Response
///
/// - 200 OK: Updated pet
/// - 400 Bad Request: Blank name or body/path id mismatch
/// - 404 Not Found: No pet with this id
#[instrument(skip_all, name = "petstore.pets.update", fields(pet_id = id))]
pub async fn update_pet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePetRequest>,
) -> Result<Json<Pet>, PetStoreError> {
    let updated = observe("update", state.store.update(id, request).await)?;

    info!(target: "petstore.handlers.pets", pet_id = id, "Pet updated");

    Ok(Json(updated))
}

/// Handler for DELETE /pet/{id} and DELETE /api/pets/{id}
///
/// # Response
///
/// - 204 No Content: Pet removed
/// - 404 Not Found: No pet with this id
#[instrument(skip_all, name = "petstore.pets.delete", fields(pet_id = id))]
pub async fn delete_pet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, PetStoreError> {
    observe("delete", state.store.delete(id).await)?;

    info!(target: "petstore.handlers.pets", pet_id = id, "Pet deleted");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::repositories::PetStore;
    use std::collections::HashMap;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
            store: Arc::new(PetStore::new()),
            config: Config::from_vars(&HashMap::new()).unwrap(),
        })
    }

    fn buddy() -> Pet {
        Pet {
            id: 1,
            name: "Buddy".to_string(),
            status: "available".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_pet_sets_location_for_api_path() {
        let state = test_state();

        let (status, [(name, location)], Json(pet)) = create_pet(
            State(state.clone()),
            Uri::from_static("/api/pets"),
            Json(buddy()),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(name, header::LOCATION);
        assert_eq!(location, "/api/pets/1");
        assert_eq!(pet, buddy());
    }

    #[tokio::test]
    async fn test_get_pet_missing_is_not_found() {
        let result = get_pet(State(test_state()), Path(999)).await;

        assert_eq!(
            result.unwrap_err(),
            PetStoreError::NotFound("Pet 999 not found".to_string())
        );
    }

    #[tokio::test]
    async fn test_delete_pet_returns_no_content() {
        let state = test_state();
        state.store.create(buddy()).await.unwrap();

        let status = delete_pet(State(state.clone()), Path(1)).await.unwrap();

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(state.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_pets_returns_all() {
        let state = test_state();
        state.store.create(buddy()).await.unwrap();

        let Json(pets) = list_pets(State(state)).await;

        assert_eq!(pets, vec![buddy()]);
    }
}
