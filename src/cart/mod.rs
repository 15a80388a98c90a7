//! Cart reconciliation: line items, quantity changes and order submission.

pub mod actor;
pub mod error;
pub mod notification;
pub mod reconciler;
pub mod stepper;

pub use actor::*;
pub use error::*;
pub use notification::*;
pub use reconciler::*;
pub use stepper::*;

use crate::clients::CartClient;
use crate::config::CartConfig;
use crate::model::CartSnapshot;

/// Creates a new Cart actor and its client, sized from the configuration.
pub fn new(config: &CartConfig, snapshot: CartSnapshot) -> (CartActor, CartClient) {
    CartActor::new(config.buffer_size, snapshot)
}
