//! Domain logic for the bookshop storefront.
//!
//! This crate provides the pieces a storefront front end drives:
//!
//! - **Catalog**: Books, text/category filtering, sorting
//! - **Cart**: An owned cart store with derived totals and change subscriptions
//! - **Checkout**: A four-step wizard ending in an asynchronous order submission
//! - **Orders**: Order records and the in-memory order book used by admin screens
//! - **Offers**: Promotional offers listed and deleted by administrators
//!
//! # Example
//!
//! ```rust,ignore
//! use bookshop_commerce::prelude::*;
//!
//! let catalog = Catalog::sample();
//! let mut cart = CartStore::new();
//! cart.add_item(catalog.get(&ProductId::new("1")).unwrap(), 1)?;
//!
//! let mut checkout = CheckoutFlow::begin(&cart, ValidationPolicy::Permissive);
//! checkout.set_field(CheckoutField::FirstName("Ada".into()))?;
//! while let Next::Advanced(_) = checkout.next()? {}
//!
//! let book = OrderBook::new();
//! let sink = SimulatedOrderSink::new(book.clone());
//! let order = checkout.submit(&mut cart, &sink).await?;
//! println!("Total: {}", Money::from_decimal(order.total, Currency::USD));
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod pricing;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod offers;
pub mod orders;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::pricing::{OrderSummary, TAX_RATE};

    // Catalog
    pub use crate::catalog::{Catalog, CatalogQuery, Product, ProductFilter, SortOption};

    // Cart
    pub use crate::cart::{CartState, CartStore, LineItem, QuantityPolicy};

    // Checkout
    pub use crate::checkout::{
        CardDetails, CheckoutField, CheckoutFlow, CheckoutForm, CheckoutState, CheckoutStep,
        ContactInfo, Next, OrderSink, PaymentMethod, ShippingDetails, SimulatedOrderSink,
        ValidationPolicy,
    };

    // Orders
    pub use crate::orders::{
        Order, OrderBook, OrderFilter, OrderStatus, ShippingAddress, StatusFilter,
    };

    // Offers
    pub use crate::offers::{Offer, OfferKind, OfferList, OfferStatus};
}
