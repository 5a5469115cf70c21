//! Pet Store configuration.
//!
//! Configuration is loaded from environment variables with sensible
//! defaults. `Config::from_vars` takes an explicit map so tests never
//! touch the process environment.

use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Default HTTP bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Default graceful shutdown drain period in seconds.
pub const DEFAULT_DRAIN_SECONDS: u64 = 5;

/// Default service name reported by the health endpoint.
pub const DEFAULT_SERVICE_NAME: &str = "pet-store";

/// Pet Store configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: "0.0.0.0:8080").
    pub bind_address: String,

    /// Per-request timeout in seconds (default: 30).
    pub request_timeout_seconds: u64,

    /// Seconds to wait for in-flight requests after a shutdown signal (default: 5).
    pub drain_seconds: u64,

    /// Service name reported by `/health`.
    pub service_name: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid request timeout configuration: {0}")]
    InvalidRequestTimeout(String),

    #[error("Invalid drain period configuration: {0}")]
    InvalidDrainSeconds(String),

    #[error("Invalid service name configuration: {0}")]
    InvalidServiceName(String),
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let request_timeout_seconds = if let Some(value_str) = vars.get("REQUEST_TIMEOUT_SECONDS")
        {
            let value: u64 = value_str.parse().map_err(|e| {
                ConfigError::InvalidRequestTimeout(format!(
                    "REQUEST_TIMEOUT_SECONDS must be a valid positive integer, got '{}': {}",
                    value_str, e
                ))
            })?;

            if value == 0 {
                return Err(ConfigError::InvalidRequestTimeout(
                    "REQUEST_TIMEOUT_SECONDS must be greater than 0".to_string(),
                ));
            }

            value
        } else {
            DEFAULT_REQUEST_TIMEOUT_SECONDS
        };

        let drain_seconds = match vars.get("DRAIN_SECONDS") {
            Some(value_str) => value_str.parse().map_err(|e| {
                ConfigError::InvalidDrainSeconds(format!(
                    "DRAIN_SECONDS must be a valid non-negative integer, got '{}': {}",
                    value_str, e
                ))
            })?,
            None => DEFAULT_DRAIN_SECONDS,
        };

        let service_name = match vars.get("SERVICE_NAME") {
            Some(name) if name.trim().is_empty() => {
                return Err(ConfigError::InvalidServiceName(
                    "SERVICE_NAME must not be empty".to_string(),
                ));
            }
            Some(name) => name.clone(),
            None => DEFAULT_SERVICE_NAME.to_string(),
        };

        Ok(Config {
            bind_address,
            request_timeout_seconds,
            drain_seconds,
            service_name,
        })
    }
}
