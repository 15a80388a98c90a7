use crate::model::{Product, ProductId, UserId};
use serde::{Deserialize, Serialize};

/// A (product, quantity) pair pending order submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product.product_id
    }
}

/// Cart object previously fetched from the Order Service and handed to the
/// cart screen on navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub user_id: UserId,
    #[serde(default)]
    pub cart_line_items: Vec<CartLineItem>,
}

/// Emitted by a line-item view whenever its quantity changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityChange {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl QuantityChange {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Lifecycle state of a cart screen.
///
/// `Empty` is terminal: only a fresh snapshot can populate a cart again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    Populated,
    Empty,
}

/// What the cart view renders after every event.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub items: Vec<CartLineItem>,
    pub state: CartState,
    pub total_quantity: u64,
}
