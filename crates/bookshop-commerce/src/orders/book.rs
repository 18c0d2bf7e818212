//! In-memory order book shared between the order sink and admin views.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cart::LineItem;
use crate::checkout::{ContactInfo, PaymentMethod};
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::orders::{Order, OrderStatus, ShippingAddress};
use crate::pricing::OrderSummary;

/// Status filter for order listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }
}

impl From<Option<OrderStatus>> for StatusFilter {
    fn from(status: Option<OrderStatus>) -> Self {
        status.map_or(StatusFilter::All, StatusFilter::Only)
    }
}

/// Admin order search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderFilter {
    /// Matched against the order id, or case-insensitively against the
    /// customer name and email. Empty matches everything.
    pub search: String,
    pub status: StatusFilter,
}

impl OrderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<StatusFilter>) -> Self {
        self.status = status.into();
        self
    }

    pub fn matches(&self, order: &Order) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = order.id.as_str().contains(self.search.as_str())
            || order.customer_name().to_lowercase().contains(&needle)
            || order.customer.email.to_lowercase().contains(&needle);

        matches_search && self.status.matches(order.status)
    }
}

/// Orders recorded this session.
///
/// Cloning shares the same underlying list.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Arc<Mutex<Vec<Order>>>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// An order book seeded with the admin demo orders.
    pub fn sample() -> Self {
        let book = Self::new();
        for order in sample_orders() {
            book.record(order);
        }
        book
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Order>> {
        self.orders.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an order.
    pub fn record(&self, order: Order) {
        info!(order_id = %order.id, total = order.total, "recorded order");
        self.lock().push(order);
    }

    pub fn get(&self, id: &OrderId) -> Option<Order> {
        self.lock().iter().find(|o| &o.id == id).cloned()
    }

    /// All orders, newest first. Orders with the same timestamp keep
    /// reverse recording order.
    pub fn all(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.lock().iter().rev().cloned().collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    /// Orders matching the filter, newest first.
    pub fn filter(&self, filter: &OrderFilter) -> Vec<Order> {
        self.all().into_iter().filter(|o| filter.matches(o)).collect()
    }

    /// Change an order's status and return the updated order.
    pub fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, CommerceError> {
        let mut orders = self.lock();
        let order = orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| CommerceError::OrderNotFound(id.to_string()))?;

        let previous = order.status;
        order.status = status;
        info!(
            order_id = %id,
            from = previous.as_str(),
            to = status.as_str(),
            "updated order status"
        );
        Ok(order.clone())
    }

    /// Number of orders per status, in status order.
    pub fn status_counts(&self) -> Vec<(OrderStatus, usize)> {
        let orders = self.lock();
        OrderStatus::ALL
            .into_iter()
            .map(|s| (s, orders.iter().filter(|o| o.status == s).count()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

fn sample_orders() -> Vec<Order> {
    let line = |id: &str, title: &str, quantity: i64, price: f64| LineItem {
        id: ProductId::new(id),
        title: title.to_string(),
        author: String::new(),
        unit_price: price,
        quantity,
        description: String::new(),
        category: String::new(),
    };

    let order = |id: &str,
                 first: &str,
                 last: &str,
                 email: &str,
                 status: OrderStatus,
                 day: u32,
                 items: Vec<LineItem>| {
        let subtotal: f64 = items.iter().map(LineItem::line_total).sum();
        let item_count: i64 = items.iter().map(|i| i.quantity).sum();
        let summary = OrderSummary::from_subtotal(subtotal, item_count);
        let customer = ContactInfo {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            phone: String::new(),
        };
        Order {
            id: OrderId::new(id),
            items,
            item_count,
            subtotal: summary.subtotal,
            tax: summary.tax,
            total: summary.total,
            shipping_address: ShippingAddress {
                name: customer.full_name(),
                address: String::new(),
                city: String::new(),
                state: String::new(),
                zip_code: String::new(),
            },
            customer,
            payment_method: PaymentMethod::CashOnDelivery,
            status,
            created_at: june_2023(day),
        }
    };

    vec![
        order("1005", "Michael", "Wilson", "m.wilson@example.com", OrderStatus::Cancelled, 8,
            vec![
                line("2", "To Kill a Mockingbird", 1, 14.99),
                line("4", "A Brief History of Time", 1, 9.99),
            ]),
        order("1004", "Emily", "Davis", "emily.davis@example.com", OrderStatus::Pending, 10,
            vec![line("1", "The Great Gatsby", 1, 12.99), line("3", "1984", 1, 19.98)]),
        order("1003", "Robert", "Johnson", "robert.j@example.com", OrderStatus::Shipped, 12,
            vec![line("5", "The Art of War", 1, 9.99), line("6", "Sapiens", 1, 7.00)]),
        order("1002", "Jane", "Smith", "jane.smith@example.com", OrderStatus::Processing, 14,
            vec![
                line("3", "1984", 1, 13.99),
                line("4", "A Brief History of Time", 1, 14.99),
            ]),
        order("1001", "John", "Doe", "john.doe@example.com", OrderStatus::Delivered, 15,
            vec![
                line("1", "The Great Gatsby", 1, 12.99),
                line("2", "To Kill a Mockingbird", 2, 16.49),
            ]),
    ]
}

fn june_2023(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 6, day, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_sample_is_newest_first() {
        let book = OrderBook::sample();
        assert_eq!(book.len(), 5);
        assert_eq!(ids(&book.all()), vec!["1001", "1002", "1003", "1004", "1005"]);
    }

    #[test]
    fn test_search_by_id_name_and_email() {
        let book = OrderBook::sample();

        let by_id = book.filter(&OrderFilter::new().with_search("1003"));
        assert_eq!(ids(&by_id), vec!["1003"]);

        let by_name = book.filter(&OrderFilter::new().with_search("jane"));
        assert_eq!(ids(&by_name), vec!["1002"]);

        let by_email = book.filter(&OrderFilter::new().with_search("M.WILSON@"));
        assert_eq!(ids(&by_email), vec!["1005"]);

        assert_eq!(book.filter(&OrderFilter::new()).len(), 5);
    }

    #[test]
    fn test_status_filter() {
        let book = OrderBook::sample();
        let pending =
            book.filter(&OrderFilter::new().with_status(StatusFilter::Only(OrderStatus::Pending)));
        assert_eq!(ids(&pending), vec!["1004"]);

        let none = book.filter(
            &OrderFilter::new()
                .with_search("john")
                .with_status(Some(OrderStatus::Cancelled)),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_update_status() {
        let book = OrderBook::sample();
        let updated = book.update_status(&OrderId::new("1004"), OrderStatus::Processing).unwrap();
        assert_eq!(updated.status, OrderStatus::Processing);
        assert_eq!(book.get(&OrderId::new("1004")).unwrap().status, OrderStatus::Processing);

        assert_eq!(
            book.update_status(&OrderId::new("9999"), OrderStatus::Shipped),
            Err(CommerceError::OrderNotFound("9999".to_string()))
        );
    }

    #[test]
    fn test_status_counts() {
        let book = OrderBook::sample();
        book.update_status(&OrderId::new("1004"), OrderStatus::Delivered).unwrap();

        let counts = book.status_counts();
        assert_eq!(counts.len(), 5);
        assert_eq!(counts[0], (OrderStatus::Pending, 0));
        assert_eq!(counts[3], (OrderStatus::Delivered, 2));
    }

    #[test]
    fn test_clones_share_orders() {
        let book = OrderBook::new();
        let handle = book.clone();
        for order in sample_orders().into_iter().take(2) {
            handle.record(order);
        }
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_sample_totals_follow_tax_rule() {
        let book = OrderBook::sample();
        for order in book.all() {
            assert_eq!(
                order.summary(),
                OrderSummary::from_subtotal(order.subtotal, order.item_count)
            );
        }
    }
}
