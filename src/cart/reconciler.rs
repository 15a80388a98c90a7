//! # Cart Reconciler
//!
//! Owns the line items of one cart screen. Quantity changes coming from the
//! line-item views are applied here, and the cart is turned into a single
//! order-creation request on submit.
//!
//! ## Invariants
//!
//! - No line item with quantity `0` is ever held: loading a snapshot drops them
//!   and [`CartReconciler::update_quantity`] removes an item the moment it reaches zero.
//! - Product identifiers are unique within the cart.
//! - Once empty, the cart stays empty. Quantity changes only touch existing items.

use crate::cart::{CartError, QuantityListener};
use crate::clients::OrderService;
use crate::model::{
    CartLineItem, CartSnapshot, CartState, CartView, OrderItem, OrderParties, OrderRequest,
    ProductId, QuantityChange,
};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartReconciler {
    items: Vec<CartLineItem>,
}

impl CartReconciler {
    /// Builds the cart from a previously fetched snapshot.
    ///
    /// Zero-quantity lines are dropped and repeated products are merged into
    /// their first occurrence.
    pub fn from_snapshot(snapshot: CartSnapshot) -> Self {
        let mut items: Vec<CartLineItem> = Vec::with_capacity(snapshot.cart_line_items.len());

        for line in snapshot.cart_line_items {
            if line.quantity == 0 {
                debug!(product_id = %line.product_id(), "Dropping empty line from snapshot");
                continue;
            }
            match items.iter_mut().find(|item| item.product_id() == line.product_id()) {
                Some(existing) => {
                    debug!(product_id = %line.product_id(), "Merging duplicate line from snapshot");
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => items.push(line),
            }
        }

        info!(user_id = %snapshot.user_id, size = items.len(), "Cart loaded");
        Self { items }
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn state(&self) -> CartState {
        if self.items.is_empty() {
            CartState::Empty
        } else {
            CartState::Populated
        }
    }

    /// Sum of all line quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn view(&self) -> CartView {
        CartView {
            items: self.items.clone(),
            state: self.state(),
            total_quantity: self.total_quantity(),
        }
    }

    /// Sets the quantity of the line holding `product_id`.
    ///
    /// A quantity of `0` removes the line. Unknown products are ignored.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        let Some(index) = self.items.iter().position(|item| item.product_id() == product_id) else {
            debug!(%product_id, quantity, "Ignoring quantity change for unknown product");
            return;
        };

        if quantity == 0 {
            self.items.remove(index);
            info!(%product_id, size = self.items.len(), "Line removed");
        } else {
            self.items[index].quantity = quantity;
            debug!(%product_id, quantity, "Quantity updated");
        }
    }

    /// Projects the cart onto order items, keeping cart order and skipping empty lines.
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.items
            .iter()
            .filter(|item| item.quantity > 0)
            .map(|item| OrderItem {
                product_id: item.product_id().clone(),
                quantity: item.quantity,
            })
            .collect()
    }

    /// Runs the local checks and builds the order-creation request.
    pub fn prepare_order(&self, parties: &OrderParties) -> Result<OrderRequest, CartError> {
        if self.items.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let order_items = self.order_items();
        if order_items.is_empty() {
            return Err(CartError::NoItemsToOrder);
        }

        Ok(OrderRequest {
            retailer_id: parties.retailer_id.clone(),
            dealer_id: parties.dealer_id.clone(),
            order_items,
        })
    }

    /// Submits the cart to the Order Service.
    ///
    /// On success the cart is cleared and the service's confirmation is
    /// returned. On any failure the cart is left untouched so the user can
    /// retry. Nothing is retried automatically.
    pub async fn submit_order<S>(&mut self, parties: &OrderParties, service: &S) -> Result<String, CartError>
    where
        S: OrderService + ?Sized,
    {
        let request = match self.prepare_order(parties) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Order not submitted");
                return Err(e);
            }
        };

        info!(
            retailer_id = %request.retailer_id,
            dealer_id = %request.dealer_id,
            items = request.order_items.len(),
            "Submitting order"
        );

        match service.place_order(&request).await {
            Ok(message) => {
                self.items.clear();
                info!(%message, "Order placed, cart cleared");
                Ok(message)
            }
            Err(e) => {
                warn!(error = %e, size = self.items.len(), "Order failed, cart kept");
                Err(CartError::Service(e))
            }
        }
    }
}

impl QuantityListener for CartReconciler {
    fn on_quantity_change(&mut self, change: QuantityChange) {
        self.update_quantity(&change.product_id, change.quantity);
    }
}
