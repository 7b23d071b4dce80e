use std::sync::Arc;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainResult, ProductId};

/// Product record as owned by the catalog collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Units currently available for sale.
    pub quantity: u64,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
}

/// One product's share of a stock reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReservation {
    pub product_id: ProductId,
    pub quantity: u64,
}

/// Lookup/update capability over the externally-owned product catalog.
pub trait ProductCatalog: Send + Sync {
    /// Resolve the given ids to current product records.
    ///
    /// Returns only matched products, deduplicated by id, in first-seen
    /// request order. Verifying completeness against the request is the
    /// caller's responsibility.
    fn find_all_by_id(&self, ids: &[ProductId]) -> Vec<Product>;

    /// Atomically decrement stock for every reservation, or for none.
    ///
    /// Each decrement is guarded by `stock >= requested`, evaluated together
    /// with the writes under whatever isolation the implementation provides.
    /// A failed guard rejects the whole batch with `InsufficientStock`, an
    /// unknown id with `InvalidProducts`; nothing is applied on rejection.
    fn reserve(&self, reservations: &[StockReservation]) -> DomainResult<()>;
}

impl<S> ProductCatalog for Arc<S>
where
    S: ProductCatalog + ?Sized,
{
    fn find_all_by_id(&self, ids: &[ProductId]) -> Vec<Product> {
        (**self).find_all_by_id(ids)
    }

    fn reserve(&self, reservations: &[StockReservation]) -> DomainResult<()> {
        (**self).reserve(reservations)
    }
}
