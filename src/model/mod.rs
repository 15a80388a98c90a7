//! Pure data structures (DTOs) exchanged between the views, the cart and the Order Service.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::*;
pub use order::*;
pub use product::*;
pub use user::*;
