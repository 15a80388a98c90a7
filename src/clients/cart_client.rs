//! # Cart Client
//!
//! The handle a cart view holds. Every method is a message to the
//! [`CartActor`](crate::cart::CartActor); the view never touches the line items directly.
use crate::cart::{CartError, CartRequest, Notification};
use crate::model::{CartView, QuantityChange};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    /// Delivers a line-item quantity change and returns the cart to re-render.
    #[instrument(skip(self))]
    pub async fn on_quantity_change(&self, change: QuantityChange) -> Result<CartView, CartError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CartRequest::UpdateQuantity { change, respond_to })
            .await
            .map_err(|_| CartError::SessionClosed)?;
        response.await.map_err(|_| CartError::SessionDropped)
    }

    pub async fn view(&self) -> Result<CartView, CartError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CartRequest::View { respond_to })
            .await
            .map_err(|_| CartError::SessionClosed)?;
        response.await.map_err(|_| CartError::SessionDropped)
    }

    /// Submits the cart and returns the service's confirmation message.
    #[instrument(skip(self))]
    pub async fn submit_order(&self) -> Result<String, CartError> {
        info!("Sending submit to cart actor");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CartRequest::Submit { respond_to })
            .await
            .map_err(|_| CartError::SessionClosed)?;
        response.await.map_err(|_| CartError::SessionDropped)?
    }

    /// Submits the cart and maps the outcome onto the alert to show.
    pub async fn place_order(&self) -> Notification {
        let outcome = self.submit_order().await;
        Notification::from_outcome(&outcome)
    }
}
