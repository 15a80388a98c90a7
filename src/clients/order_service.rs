//! # Order Service
//!
//! The cart talks to the backend through the [`OrderService`] trait. Production code
//! uses [`HttpOrderService`]; tests use [`MockOrderService`](crate::mock::MockOrderService).

use crate::clients::OrderServiceError;
use crate::config::CartConfig;
use crate::model::OrderRequest;
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Path of the order-creation endpoint, relative to the service base URL.
pub const ORDER_ADD_PATH: &str = "/order/add";

/// Confirmation used when the service accepts an order with an empty body.
pub const DEFAULT_CONFIRMATION: &str = "Order placed successfully.";

/// Seam for the external Order Service.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Creates an order and returns the service's confirmation message.
    async fn place_order(&self, request: &OrderRequest) -> Result<String, OrderServiceError>;
}

/// HTTP/JSON client for the Order Service.
#[derive(Clone)]
pub struct HttpOrderService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpOrderService {
    pub fn new(config: &CartConfig) -> Result<Self, OrderServiceError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| OrderServiceError::Client(e.to_string()))?;

        Ok(Self::with_client(client, &config.order_service_url))
    }

    /// Uses a caller-built `reqwest::Client` (custom proxy, TLS or timeout settings).
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), ORDER_ADD_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl OrderService for HttpOrderService {
    #[instrument(skip(self, request), fields(endpoint = %self.endpoint, items = request.order_items.len()))]
    async fn place_order(&self, request: &OrderRequest) -> Result<String, OrderServiceError> {
        debug!(?request, "place_order called");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| OrderServiceError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| OrderServiceError::Transport(e.to_string()))?;

        if status.is_success() {
            info!(status = status.as_u16(), "Order accepted");
            Ok(body_text(&body).unwrap_or_else(|| DEFAULT_CONFIRMATION.to_string()))
        } else {
            warn!(status = status.as_u16(), "Order rejected");
            Err(OrderServiceError::Rejected {
                status: status.as_u16(),
                message: body_text(&body),
            })
        }
    }
}

/// Extracts the human-readable text of a response body.
///
/// Accepts a JSON object with a `message` field, a JSON string, or plain text.
/// Blank bodies yield `None`.
pub fn body_text(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let text = match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(serde_json::Value::Object(map)) => match map.get("message") {
            Some(serde_json::Value::String(s)) => s.clone(),
            _ => trimmed.to_string(),
        },
        _ => trimmed.to_string(),
    };

    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
