//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! The compact format hides the module prefix (`with_target(false)`) and shows
//! spans inline, e.g. `submit_order: Sending submit to cart actor`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final cart size
//! - **Cart Events**: quantity updates, removed lines, ignored unknown products
//! - **Submission**: the order sent, the service status, cart cleared or kept
//!
//! ## Usage Examples
//!
//! ```bash
//! # Transitions only
//! RUST_LOG=info cargo run -- cart.json
//!
//! # Full request payloads and every quantity change
//! RUST_LOG=debug cargo run -- cart.json
//!
//! # Only the HTTP client
//! RUST_LOG=cart_reconciler::clients=debug cargo run -- cart.json
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Cart loaded user_id=retailer_1 size=2
//! INFO Cart actor started size=2
//! INFO submit_order: Sending submit to cart actor
//! INFO Submitting order retailer_id=retailer_1 dealer_id=dealer_1 items=2
//! INFO place_order: Order accepted endpoint=... items=2 status=200
//! INFO Order placed, cart cleared message="Order placed"
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
