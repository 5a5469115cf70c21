//! In-memory pet store.
//!
//! Holds the authoritative set of `Pet` records for the lifetime of the
//! process. Records are kept in insertion order and looked up by linear scan.
//!
//! # Concurrency
//!
//! All records sit behind a single `RwLock`. Reads take the shared lock;
//! writes hold the exclusive lock across their check-then-mutate step, so
//! two concurrent creates with the same id can never both succeed. The lock
//! is never held across I/O.

use crate::errors::PetStoreError;
use crate::models::{Pet, UpdatePetRequest};
use crate::observability::metrics::set_pets_stored;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// In-memory registry of pets keyed by id.
#[derive(Debug, Default)]
pub struct PetStore {
    pets: RwLock<Vec<Pet>>,
}

impl PetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_pets(Vec::new())
    }

    /// Create a store pre-populated with `pets`.
    ///
    /// Later duplicates of an id are dropped so the uniqueness invariant
    /// holds from the start.
    pub fn with_pets(pets: impl IntoIterator<Item = Pet>) -> Self {
        let mut records: Vec<Pet> = Vec::new();
        for pet in pets {
            if !records.iter().any(|existing| existing.id == pet.id) {
                records.push(pet);
            }
        }
        set_pets_stored(records.len());

        Self {
            pets: RwLock::new(records),
        }
    }

    /// Get the pet with `id`.
    #[instrument(skip_all, fields(pet_id = id))]
    pub async fn get(&self, id: i64) -> Result<Pet, PetStoreError> {
        let pets = self.pets.read().await;
        pets.iter()
            .find(|pet| pet.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// All pets in insertion order.
    pub async fn list(&self) -> Vec<Pet> {
        self.pets.read().await.clone()
    }

    /// Store a new pet.
    ///
    /// Rejects a blank name with `BadRequest` and an id that is already
    /// stored with `Conflict`.
    #[instrument(skip_all, fields(pet_id = pet.id))]
    pub async fn create(&self, pet: Pet) -> Result<Pet, PetStoreError> {
        pet.validate()
            .map_err(|e| PetStoreError::BadRequest(e.to_string()))?;

        let mut pets = self.pets.write().await;
        if pets.iter().any(|existing| existing.id == pet.id) {
            return Err(PetStoreError::Conflict(format!(
                "Pet {} already exists",
                pet.id
            )));
        }

        pets.push(pet.clone());
        set_pets_stored(pets.len());
        debug!(target: "petstore.store", pet_id = pet.id, count = pets.len(), "Pet created");

        Ok(pet)
    }

    /// Replace the name and status of the pet with `id`.
    #[instrument(skip_all, fields(pet_id = id))]
    pub async fn update(&self, id: i64, request: UpdatePetRequest) -> Result<Pet, PetStoreError> {
        request
            .validate(id)
            .map_err(|e| PetStoreError::BadRequest(e.to_string()))?;

        let mut pets = self.pets.write().await;
        let existing = pets
            .iter_mut()
            .find(|pet| pet.id == id)
            .ok_or_else(|| not_found(id))?;

        *existing = request.into_pet(id);
        let updated = existing.clone();
        set_pets_stored(pets.len());
        debug!(target: "petstore.store", pet_id = id, "Pet updated");

        Ok(updated)
    }

    /// Remove the pet with `id`, returning the removed record.
    #[instrument(skip_all, fields(pet_id = id))]
    pub async fn delete(&self, id: i64) -> Result<Pet, PetStoreError> {
        let mut pets = self.pets.write().await;
        let position = pets
            .iter()
            .position(|pet| pet.id == id)
            .ok_or_else(|| not_found(id))?;

        let removed = pets.remove(position);
        set_pets_stored(pets.len());
        debug!(target: "petstore.store", pet_id = id, count = pets.len(), "Pet deleted");

        Ok(removed)
    }

    /// Number of stored pets.
    pub async fn len(&self) -> usize {
        self.pets.read().await.len()
    }

    /// Whether the store holds no pets.
    pub async fn is_empty(&self) -> bool {
        self.pets.read().await.is_empty()
    }
}

fn not_found(id: i64) -> PetStoreError {
    PetStoreError::NotFound(format!("Pet {} not found", id))
}
