//! Runtime configuration loaded from the environment (and an optional `.env` file).

use dotenvy::dotenv;
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ORDER_SERVICE_URL: &str = "http://localhost:8080/ams/v1/user";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartConfig {
    /// Base URL of the Order Service; `/order/add` is appended to it.
    pub order_service_url: String,
    pub request_timeout: Duration,
    /// Number of pending view events the cart actor queues.
    pub buffer_size: usize,
    /// Fixed dealer to order from. When unset the caller decides.
    pub dealer_id: Option<String>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            order_service_url: DEFAULT_ORDER_SERVICE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            buffer_size: DEFAULT_BUFFER_SIZE,
            dealer_id: None,
        }
    }
}

impl CartConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok(); // Load .env file if present
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let order_service_url =
            get("ORDER_SERVICE_URL").unwrap_or_else(|| DEFAULT_ORDER_SERVICE_URL.to_string());

        let timeout_secs = match get("ORDER_SERVICE_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                name: "ORDER_SERVICE_TIMEOUT_SECS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let buffer_size = match get("CART_BUFFER_SIZE") {
            Some(raw) => raw.parse::<usize>().map_err(|e| ConfigError::Invalid {
                name: "CART_BUFFER_SIZE",
                reason: e.to_string(),
            })?,
            None => DEFAULT_BUFFER_SIZE,
        };
        if buffer_size == 0 {
            return Err(ConfigError::Invalid {
                name: "CART_BUFFER_SIZE",
                reason: "must be greater than zero".to_string(),
            });
        }

        let dealer_id = get("DEALER_ID");

        tracing::info!(%order_service_url, timeout_secs, buffer_size, "Configuration loaded");

        Ok(Self {
            order_service_url,
            request_timeout: Duration::from_secs(timeout_secs),
            buffer_size,
            dealer_id,
        })
    }
}
