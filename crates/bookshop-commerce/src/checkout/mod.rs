//! Checkout module.
//!
//! Contains the checkout form, the four-step flow and the order sink the
//! flow submits to.

mod flow;
mod form;
mod sink;

pub use flow::{CheckoutFlow, CheckoutState, CheckoutStep, Next, ValidationPolicy};
pub use form::{
    CardDetails, CheckoutField, CheckoutForm, ContactInfo, PaymentMethod, ShippingDetails,
};
pub use sink::{OrderSink, SimulatedOrderSink};
