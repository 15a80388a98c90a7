//! The quantity stepper of a single line-item view.
//!
//! Line-item views never mutate the cart directly. They own a [`LineItemStepper`],
//! and every `+`/`-` tap yields a [`QuantityChange`]. The parent delivers it to a
//! [`QuantityListener`] such as [`CartReconciler`](crate::cart::CartReconciler), or
//! sends it through [`CartClient::on_quantity_change`](crate::clients::CartClient::on_quantity_change)
//! when the cart runs as an actor.

use crate::model::{CartLineItem, ProductId, QuantityChange};

/// Receiver of `on_quantity_change(product_id, quantity)` events.
pub trait QuantityListener {
    fn on_quantity_change(&mut self, change: QuantityChange);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemStepper {
    product_id: ProductId,
    quantity: u32,
}

impl LineItemStepper {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }

    pub fn for_line(line: &CartLineItem) -> Self {
        Self::new(line.product_id().clone(), line.quantity)
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `+` tap. Saturates at `u32::MAX`.
    pub fn increment(&mut self) -> QuantityChange {
        self.quantity = self.quantity.saturating_add(1);
        self.change()
    }

    /// `-` tap. Emits nothing once the quantity is already zero.
    pub fn decrement(&mut self) -> Option<QuantityChange> {
        if self.quantity == 0 {
            return None;
        }
        self.quantity -= 1;
        Some(self.change())
    }

    fn change(&self) -> QuantityChange {
        QuantityChange {
            product_id: self.product_id.clone(),
            quantity: self.quantity,
        }
    }
}
