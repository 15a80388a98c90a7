//! # Cart Reconciler
//!
//! > **The cart-to-order flow of a retailer/dealer ordering app, without the UI.**
//!
//! A cart screen is loaded once from a cart snapshot, its line items are adjusted
//! by `+`/`-` taps on each line, and the whole cart is submitted as one order to
//! the Order Service (`POST /order/add`). On success the cart is cleared; on
//! failure it is kept so the user can retry.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Line items, snapshots, order requests, and the typed identifiers they carry.
//!
//! ### 2. The Cart ([`cart`])
//! - [`CartReconciler`](cart::CartReconciler): the line items and the submit logic.
//! - [`LineItemStepper`](cart::LineItemStepper): one line's quantity stepper.
//! - [`CartActor`](cart::CartActor): runs a reconciler in its own task, one event at a time.
//! - [`Notification`](cart::Notification): the alert shown after a submit.
//!
//! ### 3. The Interface ([`clients`])
//! - [`CartClient`](clients::CartClient): what a view holds to talk to its cart.
//! - [`OrderService`](clients::OrderService): the backend seam, with
//!   [`HttpOrderService`](clients::HttpOrderService) for production and
//!   [`MockOrderService`](mock::MockOrderService) for tests.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`CartSession`](lifecycle::CartSession) wires the actor to its parties and service.
//!
//! ## Architecture Notes
//!
//! ### Explicit identities
//! The retailer and dealer are passed in as [`OrderParties`](model::OrderParties).
//! Nothing reads a process-wide user store.
//!
//! ### One event at a time
//! The actor processes quantity changes and submits sequentially. A second submit
//! tap waits for the first instead of racing it, and a view that goes away
//! mid-submit cancels the request rather than receiving a stale result.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! ORDER_SERVICE_URL=http://localhost:8080/ams/v1/user DEALER_ID=dealer_1 \
//!     RUST_LOG=info cargo run -- cart.json
//! ```

pub mod cart;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod mock;
pub mod model;
