//! Shopping cart module.
//!
//! Contains the line item and cart state types and the cart store that owns
//! and mutates them.

mod state;
mod store;

pub use state::{CartState, LineItem};
pub use store::{CartStore, QuantityPolicy};
