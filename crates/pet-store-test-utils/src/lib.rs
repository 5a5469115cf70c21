//! # Pet Store Test Utilities
//!
//! Shared test utilities for the Pet Store service.
//!
//! This crate provides:
//! - Server test harness (`TestPetStoreServer` for black-box HTTP tests)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pet_store_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), anyhow::Error> {
//!     let server = TestPetStoreServer::spawn().await?;
//!     let client = reqwest::Client::new();
//!
//!     let response = client
//!         .get(server.url_for("/api/pets/999"))
//!         .send()
//!         .await?;
//!
//!     assert_eq!(response.status(), 404);
//!     Ok(())
//! }
//! ```

pub mod server_harness;

// Re-export commonly used items
pub use server_harness::*;
