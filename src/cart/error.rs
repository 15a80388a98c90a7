//! Error types for the cart.

use crate::clients::OrderServiceError;
use thiserror::Error;

/// Errors that can occur while reconciling or submitting a cart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// Submission was attempted with no line items.
    #[error("Your cart is empty.")]
    EmptyCart,

    /// No line item carries a positive quantity.
    #[error("There are no items to order.")]
    NoItemsToOrder,

    /// The Order Service refused the order or could not be reached.
    #[error("Failed to place order: {0}")]
    Service(#[from] OrderServiceError),

    /// The cart actor is no longer running.
    #[error("Cart session closed")]
    SessionClosed,

    /// The cart actor dropped the response channel.
    #[error("Cart session dropped the response")]
    SessionDropped,
}

impl CartError {
    /// True for failures detected before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, CartError::EmptyCart | CartError::NoItemsToOrder)
    }

    /// Error text supplied by the Order Service, if any.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            CartError::Service(e) => e.service_message(),
            _ => None,
        }
    }
}
