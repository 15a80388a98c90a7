use crate::cart::CartContext;
use crate::clients::{CartClient, OrderService};
use crate::config::CartConfig;
use crate::model::{CartSnapshot, OrderParties};
use std::sync::Arc;
use tracing::{error, info};

/// Runtime orchestrator for one cart screen.
///
/// `CartSession` is responsible for:
/// - **Lifecycle Management**: Spawning the cart actor and stopping it again
/// - **Dependency Wiring**: Injecting the acting parties and the Order Service
///
/// # Example
///
/// ```ignore
/// let session = CartSession::start(&config, snapshot, parties, Arc::new(service));
///
/// session.cart_client.on_quantity_change(QuantityChange::new("P1", 3)).await?;
/// let notification = session.cart_client.place_order().await;
///
/// session.shutdown().await?;
/// ```
pub struct CartSession {
    /// Client for interacting with the Cart actor
    pub cart_client: CartClient,

    handle: tokio::task::JoinHandle<()>,
}

impl CartSession {
    /// Loads the snapshot into a new cart actor and spawns it in its own task.
    pub fn start(
        config: &CartConfig,
        snapshot: CartSnapshot,
        parties: OrderParties,
        service: Arc<dyn OrderService>,
    ) -> Self {
        let (cart_actor, cart_client) = crate::cart::new(config, snapshot);
        let handle = tokio::spawn(cart_actor.run(CartContext::new(parties, service)));

        Self { cart_client, handle }
    }

    /// Gracefully shuts down the session.
    ///
    /// Drops the session's client and waits for the actor to drain. Clones of
    /// the client held elsewhere keep the actor alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart session...");
        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!("Cart actor task failed: {:?}", e);
            return Err(format!("Cart actor task failed: {:?}", e));
        }

        info!("Cart session shutdown complete.");
        Ok(())
    }
}
