//! Where placed orders go.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::CommerceError;
use crate::orders::{Order, OrderBook};

/// Receives an order at the end of checkout.
#[async_trait]
pub trait OrderSink: Send + Sync {
    /// Accept the order, or fail with a `CommerceError`.
    async fn submit(&self, order: &Order) -> Result<(), CommerceError>;
}

/// Stand-in for a remote order service: waits a fixed latency, then records
/// the order in an [`OrderBook`].
#[derive(Debug, Clone)]
pub struct SimulatedOrderSink {
    book: OrderBook,
    latency: Duration,
}

impl SimulatedOrderSink {
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

    pub fn new(book: OrderBook) -> Self {
        Self::with_latency(book, Self::DEFAULT_LATENCY)
    }

    pub fn with_latency(book: OrderBook, latency: Duration) -> Self {
        Self { book, latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }
}

#[async_trait]
impl OrderSink for SimulatedOrderSink {
    async fn submit(&self, order: &Order) -> Result<(), CommerceError> {
        debug!(
            order_id = %order.id,
            latency_ms = self.latency.as_millis() as u64,
            "simulating order submission"
        );
        tokio::time::sleep(self.latency).await;
        self.book.record(order.clone());
        Ok(())
    }
}
