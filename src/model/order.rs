use crate::model::{ProductId, UserId};
use serde::{Deserialize, Serialize};

/// One requested product, projected from a cart line item at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Body of `POST /order/add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub retailer_id: UserId,
    pub dealer_id: UserId,
    pub order_items: Vec<OrderItem>,
}
