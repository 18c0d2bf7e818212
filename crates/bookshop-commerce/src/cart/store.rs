//! Cart store: the single owner of the session's cart state.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

use crate::cart::{CartState, LineItem};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::pricing::OrderSummary;

/// How the store treats non-positive quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuantityPolicy {
    /// Quantities are trusted and stored verbatim, including zero or negative
    /// values passed to `update_quantity`.
    #[default]
    Permissive,
    /// Quantities <= 0 are rejected with `InvalidQuantity`.
    Strict,
}

/// Owned cart store.
///
/// Create one per session and hand it to whatever needs it; there is no
/// global instance. Every mutation rebuilds the derived totals before it
/// returns and then publishes the new state to subscribers, so a subscriber
/// never sees items and totals that disagree.
#[derive(Debug)]
pub struct CartStore {
    state: CartState,
    policy: QuantityPolicy,
    tx: watch::Sender<CartState>,
}

impl CartStore {
    /// Create an empty cart with the permissive quantity policy.
    pub fn new() -> Self {
        Self::with_policy(QuantityPolicy::default())
    }

    /// Create an empty cart with the given quantity policy.
    pub fn with_policy(policy: QuantityPolicy) -> Self {
        let (tx, _rx) = watch::channel(CartState::empty());
        Self {
            state: CartState::empty(),
            policy,
            tx,
        }
    }

    pub fn policy(&self) -> QuantityPolicy {
        self.policy
    }

    /// Add a product to the cart.
    ///
    /// If the product is already in the cart its quantity grows by
    /// `quantity`; otherwise a new line is appended. A merge that would
    /// overflow `i64` is rejected with `InvalidQuantity` under either policy
    /// and leaves the cart unchanged.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        self.check_quantity(quantity)?;

        let items = self.state.items_mut();
        if let Some(existing) = items.iter_mut().find(|i| i.id == product.id) {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::InvalidQuantity(quantity))?;
        } else {
            items.push(LineItem::from_product(product, quantity));
        }

        self.commit();
        debug!(
            product_id = %product.id,
            quantity,
            item_count = self.state.item_count(),
            total_amount = self.state.total_amount(),
            "added to cart"
        );
        Ok(())
    }

    /// Remove a line item. Returns whether anything was removed; an absent
    /// id leaves the cart untouched and notifies nobody.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let items = self.state.items_mut();
        let len_before = items.len();
        items.retain(|i| &i.id != id);
        if items.len() == len_before {
            return false;
        }

        self.commit();
        debug!(product_id = %id, item_count = self.state.item_count(), "removed from cart");
        true
    }

    /// Set the quantity of a line item. Returns whether the id was found.
    ///
    /// Under the permissive policy the value is stored as given; a quantity
    /// of zero keeps the line in the cart with no contribution to totals.
    pub fn update_quantity(
        &mut self,
        id: &ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        self.check_quantity(quantity)?;

        let Some(item) = self.state.items_mut().iter_mut().find(|i| &i.id == id) else {
            return Ok(false);
        };
        item.quantity = quantity;

        self.commit();
        debug!(
            product_id = %id,
            quantity,
            item_count = self.state.item_count(),
            total_amount = self.state.total_amount(),
            "updated cart quantity"
        );
        Ok(true)
    }

    /// Reset to an empty cart with zero totals.
    pub fn clear(&mut self) {
        self.state = CartState::empty();
        self.tx.send_replace(self.state.clone());
        debug!("cleared cart");
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        self.state.items()
    }

    /// Get a line item by product ID.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.state.get(id)
    }

    /// Sum of unit price times quantity.
    pub fn total_amount(&self) -> f64 {
        self.state.total_amount()
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> i64 {
        self.state.item_count()
    }

    /// Check if cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Borrow the current state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Subtotal, tax and total for the current items.
    pub fn summary(&self) -> OrderSummary {
        self.state.summary()
    }

    /// Subscribe to cart changes. The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.tx.subscribe()
    }

    fn check_quantity(&self, quantity: i64) -> Result<(), CommerceError> {
        if self.policy == QuantityPolicy::Strict && quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        Ok(())
    }

    fn commit(&mut self) {
        self.state.recompute();
        self.tx.send_replace(self.state.clone());
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
