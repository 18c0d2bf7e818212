//! Order types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{CartState, LineItem};
use crate::checkout::{CheckoutForm, ContactInfo, PaymentMethod, ShippingDetails};
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::pricing::OrderSummary;

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for OrderStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        OrderStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == lower)
            .ok_or_else(|| CommerceError::InvalidFieldValue {
                field: "status".to_string(),
                value: s.to_string(),
            })
    }
}

/// Shipping address as stored on the order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// Recipient, "first last".
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl ShippingAddress {
    pub fn new(contact: &ContactInfo, shipping: &ShippingDetails) -> Self {
        Self {
            name: contact.full_name(),
            address: shipping.address.clone(),
            city: shipping.city.clone(),
            state: shipping.state.clone(),
            zip_code: shipping.zip_code.clone(),
        }
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!("{}, {}, {}, {} {}", self.name, self.address, self.city, self.state, self.zip_code)
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Snapshot of the cart lines at submission.
    pub items: Vec<LineItem>,
    /// Number of units.
    pub item_count: i64,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    /// Who placed the order.
    pub customer: ContactInfo,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Build a pending order from the cart and the checkout form.
    ///
    /// Subtotal, tax and total come from the cart summary unchanged, so the
    /// stored values equal what the review step showed.
    pub fn from_checkout(cart: &CartState, form: &CheckoutForm) -> Self {
        let summary = cart.summary();
        Self {
            id: OrderId::generate(),
            items: cart.items().to_vec(),
            item_count: summary.item_count,
            subtotal: summary.subtotal,
            tax: summary.tax,
            total: summary.total,
            customer: form.contact.clone(),
            shipping_address: ShippingAddress::new(&form.contact, &form.shipping),
            payment_method: form.payment_method,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Price breakdown as recorded on the order.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            item_count: self.item_count,
            subtotal: self.subtotal,
            tax: self.tax,
            total: self.total,
        }
    }

    /// Customer display name.
    pub fn customer_name(&self) -> String {
        self.customer.full_name()
    }
}
