//! HTTP request handlers for the Pet Store.

pub mod health;
pub mod metrics;
pub mod pets;

pub use health::health_check;
pub use metrics::metrics_handler;
pub use pets::{create_pet, delete_pet, get_pet, list_pets, update_pet};
