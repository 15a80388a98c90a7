//! # Mock Order Service
//!
//! [`MockOrderService`] implements [`OrderService`] entirely in memory. Queue the
//! responses you expect with [`MockOrderService::expect_place_order`], hand the mock
//! to the cart, then assert on the recorded requests and call [`MockOrderService::verify`].
//!
//! ```rust
//! use cart_reconciler::mock::MockOrderService;
//! use cart_reconciler::clients::OrderService;
//! use cart_reconciler::model::{OrderItem, OrderRequest};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockOrderService::new();
//!     mock.expect_place_order().return_ok("Order placed");
//!
//!     let request = OrderRequest {
//!         retailer_id: "retailer_1".into(),
//!         dealer_id: "dealer_1".into(),
//!         order_items: vec![OrderItem { product_id: "P1".into(), quantity: 2 }],
//!     };
//!     let message = mock.place_order(&request).await.unwrap();
//!     assert_eq!(message, "Order placed");
//!     assert_eq!(mock.requests(), vec![request]);
//!
//!     mock.verify();
//! }
//! ```
//!
//! Every unexpected call panics, so a test that forbids network traffic only
//! needs to queue nothing and check [`MockOrderService::call_count`].

use crate::clients::{OrderService, OrderServiceError};
use crate::model::OrderRequest;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct Expectation {
    delay: Option<Duration>,
    response: Result<String, OrderServiceError>,
}

/// A mock Order Service with expectation tracking for fluent testing.
///
/// Clones share the same expectations and request log, so a test can keep one
/// handle while the cart owns another.
#[derive(Clone, Default)]
pub struct MockOrderService {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Arc<Mutex<Vec<OrderRequest>>>,
}

impl MockOrderService {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `place_order` call.
    pub fn expect_place_order(&self) -> PlaceOrderExpectationBuilder {
        PlaceOrderExpectationBuilder {
            delay: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<OrderRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl OrderService for MockOrderService {
    async fn place_order(&self, request: &OrderRequest) -> Result<String, OrderServiceError> {
        self.requests.lock().unwrap().push(request.clone());

        let expectation = self.expectations.lock().unwrap().pop_front();
        let Some(expectation) = expectation else {
            panic!("Unexpected place_order request: {:?}", request);
        };

        if let Some(delay) = expectation.delay {
            tokio::time::sleep(delay).await;
        }
        expectation.response
    }
}

/// Builder for `place_order` expectations.
pub struct PlaceOrderExpectationBuilder {
    delay: Option<Duration>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl PlaceOrderExpectationBuilder {
    /// Holds the response back for `delay`, simulating a slow service.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the expectation to return a confirmation message.
    pub fn return_ok(self, message: impl Into<String>) {
        self.push(Ok(message.into()));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: OrderServiceError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<String, OrderServiceError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            delay: self.delay,
            response,
        });
    }
}
