//! Commerce error types.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Removing or updating an id that is not in the cart is not an error; those
/// calls are no-ops.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Checkout was entered (or submitted) with no items in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Quantity rejected by the strict quantity policy.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Required fields are blank under the strict validation policy.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// The form is read-only once submission has started.
    #[error("Checkout form is locked after submission")]
    FormLocked,

    /// An order submission is already awaiting the sink.
    #[error("Order submission already in flight")]
    SubmissionInFlight,

    /// The order for this checkout has already been placed.
    #[error("Order already placed")]
    AlreadyPlaced,

    /// The order sink did not answer in time.
    #[error("Order submission timed out after {0:?}")]
    SubmissionTimedOut(Duration),

    /// The order sink rejected the order.
    #[error("Order submission failed: {0}")]
    SubmissionFailed(String),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Offer not found.
    #[error("Offer not found: {0}")]
    OfferNotFound(String),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Form field name not recognised.
    #[error("Unknown checkout field: {0}")]
    UnknownField(String),

    /// Form field value could not be interpreted.
    #[error("Invalid value for {field}: {value}")]
    InvalidFieldValue { field: String, value: String },
}
