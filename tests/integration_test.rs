use cart_reconciler::cart::{Notification, GENERIC_FAILURE};
use cart_reconciler::clients::{HttpOrderService, OrderService};
use cart_reconciler::config::CartConfig;
use cart_reconciler::lifecycle::CartSession;
use cart_reconciler::model::{CartSnapshot, CartState, OrderParties, QuantityChange};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

/// A request captured by the stub Order Service.
#[derive(Debug)]
struct CapturedRequest {
    head: String,
    body: String,
}

/// Serves every connection with the same canned response and reports what it received.
async fn spawn_order_service(
    status: &'static str,
    body: &'static str,
) -> (String, mpsc::UnboundedReceiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let request = read_request(&mut socket).await;
            let _ = tx.send(request);

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{}/ams/v1/user", addr), rx)
}

async fn read_request(socket: &mut TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before body");
        buf.extend_from_slice(&chunk[..n]);
    }

    CapturedRequest {
        head,
        body: String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string(),
    }
}

fn service(base_url: &str) -> Arc<dyn OrderService> {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    Arc::new(HttpOrderService::with_client(client, base_url))
}

fn snapshot() -> CartSnapshot {
    serde_json::from_value(json!({
        "userId": "retailer_1",
        "cartLineItems": [
            {
                "product": {
                    "productId": "P1",
                    "name": "Widget",
                    "description": "Blue widget",
                    "image": "iVBORw0KGgo=",
                    "price": 12.5
                },
                "quantity": 2
            },
            {
                "product": { "productId": "P2", "name": "Gadget" },
                "quantity": 3
            }
        ]
    }))
    .unwrap()
}

fn parties() -> OrderParties {
    OrderParties::new("retailer_1", "dealer_1")
}

#[tokio::test]
async fn test_order_placed_over_http() {
    let (base_url, mut requests) = spawn_order_service("200 OK", "Order placed successfully").await;
    let session = CartSession::start(&CartConfig::default(), snapshot(), parties(), service(&base_url));

    let notification = session.cart_client.place_order().await;
    assert_eq!(
        notification,
        Notification::OrderPlaced { message: "Order placed successfully".to_string() }
    );

    let request = requests.recv().await.unwrap();
    assert!(request.head.starts_with("POST /ams/v1/user/order/add HTTP/1.1"), "{}", request.head);
    assert!(request.head.to_ascii_lowercase().contains("content-type: application/json"));

    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(
        body,
        json!({
            "retailerId": "retailer_1",
            "dealerId": "dealer_1",
            "orderItems": [
                { "productId": "P1", "quantity": 2 },
                { "productId": "P2", "quantity": 3 }
            ]
        })
    );

    let view = session.cart_client.view().await.unwrap();
    assert_eq!(view.state, CartState::Empty);

    session.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_updated_quantities_are_sent() {
    let (base_url, mut requests) = spawn_order_service("201 Created", "").await;
    let session = CartSession::start(&CartConfig::default(), snapshot(), parties(), service(&base_url));

    session.cart_client.on_quantity_change(QuantityChange::new("P1", 0)).await.unwrap();
    session.cart_client.on_quantity_change(QuantityChange::new("P2", 7)).await.unwrap();

    let notification = session.cart_client.place_order().await;
    assert_eq!(notification.body(), "Order placed successfully.");

    let body: serde_json::Value = serde_json::from_str(&requests.recv().await.unwrap().body).unwrap();
    assert_eq!(body["orderItems"], json!([{ "productId": "P2", "quantity": 7 }]));

    session.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejected_order_keeps_cart() {
    let (base_url, _requests) = spawn_order_service("400 Bad Request", "Out of stock").await;
    let session = CartSession::start(&CartConfig::default(), snapshot(), parties(), service(&base_url));

    let notification = session.cart_client.place_order().await;
    assert_eq!(notification.reason(), Some("Out of stock"));
    assert_eq!(notification.body(), "Failed to place order: Out of stock");

    let view = session.cart_client.view().await.unwrap();
    let quantities: Vec<(&str, u32)> = view
        .items
        .iter()
        .map(|item| (item.product.product_id.0.as_str(), item.quantity))
        .collect();
    assert_eq!(quantities, vec![("P1", 2), ("P2", 3)]);

    session.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_json_error_message() {
    let (base_url, _requests) =
        spawn_order_service("500 Internal Server Error", r#"{"message":"Dealer not approved"}"#).await;
    let session = CartSession::start(&CartConfig::default(), snapshot(), parties(), service(&base_url));

    let notification = session.cart_client.place_order().await;
    assert_eq!(notification.reason(), Some("Dealer not approved"));

    session.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unreachable_service() {
    // Reserve a port, then close it so the connection is refused
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base_url = format!("http://{}/ams/v1/user", addr);
    let session = CartSession::start(&CartConfig::default(), snapshot(), parties(), service(&base_url));

    let notification = session.cart_client.place_order().await;
    assert_eq!(notification, Notification::OrderFailed { reason: None });
    assert_eq!(notification.body(), GENERIC_FAILURE);

    let view = session.cart_client.view().await.unwrap();
    assert_eq!(view.total_quantity, 5);

    session.shutdown().await.unwrap();
}
