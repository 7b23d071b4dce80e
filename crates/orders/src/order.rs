use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{CustomerId, OrderId, ProductId};
use storefront_customers::Customer;

/// Order line: product, quantity, price captured at order time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u64,
    /// Price in smallest currency unit (e.g., cents), frozen when the order
    /// is placed. Later catalog repricing never rewrites it.
    pub unit_price: u64,
}

/// Persisted order aggregate: one customer plus its lines.
///
/// Created exactly once per successful placement and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub lines: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
}

/// Persistence capability for order aggregates.
pub trait OrderStore: Send + Sync {
    /// Persist a new order and return the stored representation (identifier
    /// and timestamp assigned by the store).
    fn create(&self, customer: &Customer, lines: Vec<OrderLine>) -> Order;
}

impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    fn create(&self, customer: &Customer, lines: Vec<OrderLine>) -> Order {
        (**self).create(customer, lines)
    }
}
