//! Runtime orchestration: the cart session lifecycle and tracing setup.

pub mod cart_session;
pub mod tracing;

pub use cart_session::*;
pub use self::tracing::*;
