//! Tax and total derivation.

use serde::{Deserialize, Serialize};

use crate::money::{Currency, Money};

/// Sales tax applied to every subtotal.
pub const TAX_RATE: f64 = 0.08;

/// Multiplier taking a subtotal to its tax-inclusive total.
pub const TAX_INCLUSIVE_FACTOR: f64 = 1.08;

/// Subtotal, tax and total for a set of line items.
///
/// Totals are derived with [`OrderSummary::from_subtotal`], which the cart
/// summary, the checkout review and [`Order::from_checkout`] all call. The
/// fields stay public so a stored order can hand back the figures it was
/// placed with through [`Order::summary`]. Values are never rounded here.
///
/// [`Order::from_checkout`]: crate::orders::Order::from_checkout
/// [`Order::summary`]: crate::orders::Order::summary
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Number of units (sum of quantities).
    pub item_count: i64,
    /// Sum of unit price times quantity.
    pub subtotal: f64,
    /// `subtotal * TAX_RATE`.
    pub tax: f64,
    /// `subtotal * TAX_INCLUSIVE_FACTOR`.
    pub total: f64,
}

impl OrderSummary {
    pub fn from_subtotal(subtotal: f64, item_count: i64) -> Self {
        Self {
            item_count,
            subtotal,
            tax: subtotal * TAX_RATE,
            total: subtotal * TAX_INCLUSIVE_FACTOR,
        }
    }

    /// Shipping is always free.
    pub fn shipping(&self) -> f64 {
        0.0
    }

    /// Rounded values for display, in (subtotal, tax, total) order.
    pub fn display(&self, currency: Currency) -> (Money, Money, Money) {
        (
            Money::from_decimal(self.subtotal, currency),
            Money::from_decimal(self.tax, currency),
            Money::from_decimal(self.total, currency),
        )
    }
}
