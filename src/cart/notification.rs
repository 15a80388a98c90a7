//! User-facing notifications raised by the cart screen.

use crate::cart::CartError;

pub const EMPTY_CART_TITLE: &str = "No Product Selected";
pub const ORDER_PLACED_TITLE: &str = "Order Placed Successfully!!";
pub const ERROR_TITLE: &str = "Error";
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// A blocking alert shown to the user after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    EmptyCart,
    NoItemsToOrder,
    OrderPlaced { message: String },
    /// `reason` holds the service's error text when it sent one.
    OrderFailed { reason: Option<String> },
}

impl Notification {
    pub fn from_outcome(outcome: &Result<String, CartError>) -> Self {
        match outcome {
            Ok(message) => Notification::OrderPlaced { message: message.clone() },
            Err(CartError::EmptyCart) => Notification::EmptyCart,
            Err(CartError::NoItemsToOrder) => Notification::NoItemsToOrder,
            Err(e) => Notification::OrderFailed {
                reason: e.service_message().map(str::to_string),
            },
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Notification::EmptyCart | Notification::NoItemsToOrder => EMPTY_CART_TITLE,
            Notification::OrderPlaced { .. } => ORDER_PLACED_TITLE,
            Notification::OrderFailed { .. } => ERROR_TITLE,
        }
    }

    pub fn body(&self) -> String {
        match self {
            Notification::EmptyCart => CartError::EmptyCart.to_string(),
            Notification::NoItemsToOrder => CartError::NoItemsToOrder.to_string(),
            Notification::OrderPlaced { message } => message.clone(),
            Notification::OrderFailed { reason: Some(reason) } => {
                format!("Failed to place order: {}", reason)
            }
            Notification::OrderFailed { reason: None } => GENERIC_FAILURE.to_string(),
        }
    }

    /// The service's error text, for failures that carried one.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Notification::OrderFailed { reason } => reason.as_deref(),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notification::OrderPlaced { .. })
    }
}
