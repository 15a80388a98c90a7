//! Clients: the cart view's handle on its actor and the Order Service seam.

pub mod cart_client;
pub mod error;
pub mod order_service;

pub use cart_client::*;
pub use error::*;
pub use order_service::*;
