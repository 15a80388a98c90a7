use cart_reconciler::clients::HttpOrderService;
use cart_reconciler::config::CartConfig;
use cart_reconciler::lifecycle::{setup_tracing, CartSession};
use cart_reconciler::model::{CartSnapshot, OrderParties};
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| "usage: cart-reconciler <cart-snapshot.json>".to_string())?;

    let config = CartConfig::from_env().map_err(|e| e.to_string())?;

    let raw = std::fs::read_to_string(&path).map_err(|e| format!("Cannot read {}: {}", path, e))?;
    let snapshot: CartSnapshot =
        serde_json::from_str(&raw).map_err(|e| format!("Invalid cart snapshot {}: {}", path, e))?;

    // The retailer is the cart owner; without a configured dealer the order goes to the same account.
    let retailer_id = snapshot.user_id.clone();
    let dealer_id = config
        .dealer_id
        .clone()
        .map(Into::into)
        .unwrap_or_else(|| retailer_id.clone());
    let parties = OrderParties::new(retailer_id, dealer_id);

    let service = HttpOrderService::new(&config).map_err(|e| e.to_string())?;
    info!(endpoint = service.endpoint(), "Starting cart session");

    let session = CartSession::start(&config, snapshot, parties, Arc::new(service));

    let view = session.cart_client.view().await.map_err(|e| e.to_string())?;
    info!(lines = view.items.len(), total_quantity = view.total_quantity, "Cart ready");

    let span = tracing::info_span!("order_processing");
    let notification = session.cart_client.place_order().instrument(span).await;

    if notification.is_success() {
        info!(title = notification.title(), body = %notification.body(), "Notification");
    } else {
        error!(title = notification.title(), body = %notification.body(), "Notification");
    }

    session.shutdown().await?;
    Ok(())
}
