//! Orders module.
//!
//! Contains the order record built at checkout and the order book that
//! admin views search and update.

mod book;
mod order;

pub use book::{OrderBook, OrderFilter, StatusFilter};
pub use order::{Order, OrderStatus, ShippingAddress};
