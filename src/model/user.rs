use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for retailers and dealers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The acting parties of an order.
///
/// Passed explicitly into the cart instead of being read from a
/// process-wide logged-in-user store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderParties {
    pub retailer_id: UserId,
    pub dealer_id: UserId,
}

impl OrderParties {
    pub fn new(retailer_id: impl Into<UserId>, dealer_id: impl Into<UserId>) -> Self {
        Self {
            retailer_id: retailer_id.into(),
            dealer_id: dealer_id.into(),
        }
    }
}
