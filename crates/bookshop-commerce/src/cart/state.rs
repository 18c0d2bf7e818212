//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::pricing::OrderSummary;
use serde::{Deserialize, Serialize};

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product being purchased; at most one line per product.
    pub id: ProductId,
    /// Book title (copied at add time).
    pub title: String,
    /// Author (copied at add time).
    pub author: String,
    /// Unit price (copied at add time).
    pub unit_price: f64,
    /// Quantity.
    pub quantity: i64,
    /// Short description (copied at add time).
    pub description: String,
    /// Category slug (copied at add time).
    pub category: String,
}

impl LineItem {
    /// Create a line item from a catalog product.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            author: product.author.clone(),
            unit_price: product.price,
            quantity,
            description: product.description.clone(),
            category: product.category.clone(),
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Cart contents plus totals derived from them.
///
/// The totals have no setter: they are rebuilt from `items` by the store
/// after every mutation, and on deserialization any stored totals are
/// ignored in favour of ones rebuilt from the items. `item_count` saturates
/// at `i64::MAX`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", from = "StoredCart")]
pub struct CartState {
    items: Vec<LineItem>,
    total_amount: f64,
    item_count: i64,
}

/// Serialized cart as read back; only the items are trusted.
#[derive(Deserialize)]
struct StoredCart {
    #[serde(default)]
    items: Vec<LineItem>,
}

impl From<StoredCart> for CartState {
    fn from(stored: StoredCart) -> Self {
        let mut state = CartState {
            items: stored.items,
            ..CartState::default()
        };
        state.recompute();
        state
    }
}

impl CartState {
    /// Empty cart with zero totals.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of unit price times quantity.
    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    /// Check if cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line item by product ID.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Subtotal, tax and total for the current items.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_subtotal(self.total_amount, self.item_count)
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<LineItem> {
        &mut self.items
    }

    pub(crate) fn recompute(&mut self) {
        self.total_amount = self.items.iter().map(LineItem::line_total).sum();
        self.item_count = self
            .items
            .iter()
            .fold(0_i64, |count, i| count.saturating_add(i.quantity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_rebuilds_totals() {
        let json = r#"{
            "items": [
                {"id": "1", "title": "The Great Gatsby", "author": "F. Scott Fitzgerald",
                 "unitPrice": 12.99, "quantity": 1, "description": "", "category": "fiction"},
                {"id": "2", "title": "To Kill a Mockingbird", "author": "Harper Lee",
                 "unitPrice": 14.99, "quantity": 2, "description": "", "category": "fiction"}
            ],
            "totalAmount": 999.0,
            "itemCount": 42
        }"#;

        let state: CartState = serde_json::from_str(json).unwrap();
        assert_eq!(state.items().len(), 2);
        assert_eq!(state.item_count(), 3);
        assert!((state.total_amount() - 42.97).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_keeps_state() {
        let mut state = CartState::empty();
        state.items_mut().push(LineItem {
            id: ProductId::new("3"),
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            unit_price: 13.99,
            quantity: 2,
            description: String::new(),
            category: "fiction".to_string(),
        });
        state.recompute();

        let json = serde_json::to_string(&state).unwrap();
        let back: CartState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
