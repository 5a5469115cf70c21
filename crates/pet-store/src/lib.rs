//! Pet Store Service Library
//!
//! This library provides a small pet-store REST API over an in-memory
//! collection of `Pet` records:
//!
//! - Pet management (list, get, create, update, delete)
//! - Health and Prometheus metrics endpoints
//!
//! # Architecture
//!
//! The service follows the Handler -> Repository pattern:
//!
//! ```text
//! routes/mod.rs -> handlers/*.rs -> repositories/*.rs
//! ```
//!
//! # Modules
//!
//! - `config` - Service configuration from environment
//! - `errors` - Error types with HTTP status code mapping
//! - `handlers` - HTTP request handlers
//! - `middleware` - HTTP middleware layers
//! - `models` - Data models
//! - `observability` - Metrics definitions
//! - `repositories` - In-memory pet store
//! - `routes` - Axum router setup

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod routes;
