//! # Cart Actor
//!
//! Runs one [`CartReconciler`] inside its own Tokio task and feeds it view events
//! through a channel.
//!
//! **Concurrency Model**:
//! The actor handles one [`CartRequest`] at a time. A submit tapped twice is
//! queued behind the first one, so the cart is never sent twice while a request is
//! in flight; the second submit simply sees the outcome of the first (an empty cart
//! after success, the same cart after failure).
//!
//! **Abandoned submits**:
//! If the caller stops waiting for a submit (the view went away and dropped its
//! response receiver), the in-flight service call is cancelled and the cart is
//! left as it was. No response is sent to the defunct view.

use crate::cart::{CartError, CartReconciler};
use crate::clients::{CartClient, OrderService};
use crate::model::{CartSnapshot, CartView, OrderParties, QuantityChange};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<T>;

/// Messages a cart view sends to its actor.
#[derive(Debug)]
pub enum CartRequest {
    UpdateQuantity {
        change: QuantityChange,
        respond_to: Response<CartView>,
    },
    Submit {
        respond_to: Response<Result<String, CartError>>,
    },
    View {
        respond_to: Response<CartView>,
    },
}

/// Dependencies injected when the actor starts.
#[derive(Clone)]
pub struct CartContext {
    pub parties: OrderParties,
    pub service: Arc<dyn OrderService>,
}

impl CartContext {
    pub fn new(parties: OrderParties, service: Arc<dyn OrderService>) -> Self {
        Self { parties, service }
    }
}

pub struct CartActor {
    receiver: mpsc::Receiver<CartRequest>,
    cart: CartReconciler,
}

impl CartActor {
    /// Loads the snapshot and opens the event channel.
    ///
    /// A `buffer_size` of 0 is raised to 1.
    pub fn new(buffer_size: usize, snapshot: CartSnapshot) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            cart: CartReconciler::from_snapshot(snapshot),
        };
        (actor, CartClient::new(sender))
    }

    /// Runs the event loop until every client is dropped.
    ///
    /// The `context` is bound here rather than in [`CartActor::new`], so the
    /// acting parties and the service can be chosen after the cart is loaded.
    pub async fn run(mut self, context: CartContext) {
        info!(size = self.cart.len(), "Cart actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::UpdateQuantity { change, respond_to } => {
                    debug!(?change, "UpdateQuantity");
                    self.cart.update_quantity(&change.product_id, change.quantity);
                    let _ = respond_to.send(self.cart.view());
                }
                CartRequest::View { respond_to } => {
                    let _ = respond_to.send(self.cart.view());
                }
                CartRequest::Submit { mut respond_to } => {
                    debug!(size = self.cart.len(), "Submit");
                    let outcome = tokio::select! {
                        outcome = self.cart.submit_order(&context.parties, context.service.as_ref()) => Some(outcome),
                        _ = respond_to.closed() => None,
                    };

                    match outcome {
                        Some(outcome) => {
                            let _ = respond_to.send(outcome);
                        }
                        None => warn!(size = self.cart.len(), "Submit abandoned by caller, cart kept"),
                    }
                }
            }
        }

        info!(size = self.cart.len(), "Cart actor shutdown");
    }
}
