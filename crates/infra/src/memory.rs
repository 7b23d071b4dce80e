//! In-memory collaborator implementations for tests/dev.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use storefront_core::{CustomerId, DomainError, DomainResult, OrderId, ProductId};
use storefront_customers::{Customer, CustomerDirectory};
use storefront_orders::{Order, OrderLine, OrderStore};
use storefront_products::{Product, ProductCatalog, StockReservation};

/// In-memory customer directory.
#[derive(Debug, Default)]
pub struct InMemoryCustomerDirectory {
    inner: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed (or replace) a customer record.
    pub fn insert(&self, customer: Customer) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(customer.id.clone(), customer);
        }
    }
}

impl CustomerDirectory for InMemoryCustomerDirectory {
    fn find_by_id(&self, id: &CustomerId) -> Option<Customer> {
        let map = self.inner.read().ok()?;
        map.get(id).cloned()
    }
}

/// In-memory product catalog.
///
/// `reserve` holds the write lock across verify-and-apply, which is what
/// makes the conditional decrement atomic with respect to concurrent
/// reservations.
#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed (or replace) a product record.
    pub fn insert(&self, product: Product) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(product.id.clone(), product);
        }
    }

    /// Current stock for one product (assertion helper).
    pub fn quantity_of(&self, id: &ProductId) -> Option<u64> {
        let map = self.inner.read().ok()?;
        map.get(id).map(|product| product.quantity)
    }

    /// Reprice a product. Stored order lines keep the price they captured.
    pub fn set_price(&self, id: &ProductId, price: u64) {
        if let Ok(mut map) = self.inner.write() {
            if let Some(product) = map.get_mut(id) {
                product.price = price;
            }
        }
    }
}

impl ProductCatalog for InMemoryProductCatalog {
    fn find_all_by_id(&self, ids: &[ProductId]) -> Vec<Product> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        let mut seen: Vec<&ProductId> = Vec::new();
        let mut found = Vec::new();
        for id in ids {
            if seen.contains(&id) {
                continue;
            }
            seen.push(id);
            if let Some(product) = map.get(id) {
                found.push(product.clone());
            }
        }
        found
    }

    fn reserve(&self, reservations: &[StockReservation]) -> DomainResult<()> {
        let mut map = match self.inner.write() {
            Ok(guard) => guard,
            // Guards run before any mutation, so a poisoned map is still
            // consistent and safe to recover.
            Err(poisoned) => poisoned.into_inner(),
        };

        // Requested totals per product; a batch may carry the same id twice.
        let mut totals: HashMap<&ProductId, u64> = HashMap::new();
        for reservation in reservations {
            *totals.entry(&reservation.product_id).or_insert(0) += reservation.quantity;
        }

        for (id, requested) in &totals {
            let Some(product) = map.get(*id) else {
                tracing::debug!(product_id = %id, "reservation rejected: unknown product");
                return Err(DomainError::InvalidProducts);
            };
            if product.quantity < *requested {
                tracing::debug!(
                    product_id = %id,
                    available = product.quantity,
                    requested = *requested,
                    "reservation rejected: insufficient stock"
                );
                return Err(DomainError::InsufficientStock);
            }
        }

        for (id, requested) in totals {
            if let Some(product) = map.get_mut(id) {
                product.quantity -= requested;
            }
        }

        Ok(())
    }
}

/// In-memory order store. Append-only; assigns ids and timestamps.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    inner: RwLock<Vec<Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All persisted orders, in creation order.
    pub fn all(&self) -> Vec<Order> {
        match self.inner.read() {
            Ok(orders) => orders.clone(),
            Err(_) => vec![],
        }
    }

    pub fn len(&self) -> usize {
        match self.inner.read() {
            Ok(orders) => orders.len(),
            Err(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrderStore for InMemoryOrderStore {
    fn create(&self, customer: &Customer, lines: Vec<OrderLine>) -> Order {
        let order = Order {
            id: OrderId::new(),
            customer_id: customer.id.clone(),
            lines,
            created_at: Utc::now(),
        };
        if let Ok(mut orders) = self.inner.write() {
            orders.push(order.clone());
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, quantity: u64, price: u64) -> Product {
        Product {
            id: id.into(),
            name: format!("product {id}"),
            quantity,
            price,
        }
    }

    fn reservation(id: &str, quantity: u64) -> StockReservation {
        StockReservation {
            product_id: id.into(),
            quantity,
        }
    }

    #[test]
    fn lookup_deduplicates_and_keeps_request_order() {
        let catalog = InMemoryProductCatalog::new();
        catalog.insert(product("P2", 5, 250));
        catalog.insert(product("P1", 10, 500));

        let found = catalog.find_all_by_id(&["P2".into(), "P1".into(), "P2".into()]);

        let ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P2", "P1"]);
    }

    #[test]
    fn lookup_skips_unknown_ids() {
        let catalog = InMemoryProductCatalog::new();
        catalog.insert(product("P1", 10, 500));

        let found = catalog.find_all_by_id(&["P1".into(), "PX".into()]);

        assert_eq!(found.len(), 1);
    }

    #[test]
    fn reserve_decrements_every_product() {
        let catalog = InMemoryProductCatalog::new();
        catalog.insert(product("P1", 10, 500));
        catalog.insert(product("P2", 5, 250));

        catalog
            .reserve(&[reservation("P1", 3), reservation("P2", 5)])
            .unwrap();

        assert_eq!(catalog.quantity_of(&"P1".into()), Some(7));
        assert_eq!(catalog.quantity_of(&"P2".into()), Some(0));
    }

    #[test]
    fn reserve_applies_nothing_when_one_guard_fails() {
        let catalog = InMemoryProductCatalog::new();
        catalog.insert(product("P1", 10, 500));
        catalog.insert(product("P2", 2, 250));

        let err = catalog
            .reserve(&[reservation("P1", 3), reservation("P2", 5)])
            .unwrap_err();

        assert_eq!(err, DomainError::InsufficientStock);
        assert_eq!(catalog.quantity_of(&"P1".into()), Some(10));
        assert_eq!(catalog.quantity_of(&"P2".into()), Some(2));
    }

    #[test]
    fn reserve_rejects_unknown_ids_untouched() {
        let catalog = InMemoryProductCatalog::new();
        catalog.insert(product("P1", 10, 500));

        let err = catalog
            .reserve(&[reservation("P1", 1), reservation("PX", 1)])
            .unwrap_err();

        assert_eq!(err, DomainError::InvalidProducts);
        assert_eq!(catalog.quantity_of(&"P1".into()), Some(10));
    }

    #[test]
    fn reserve_accumulates_duplicate_ids_before_checking() {
        let catalog = InMemoryProductCatalog::new();
        catalog.insert(product("P1", 5, 500));

        // 3 + 3 exceeds 5 even though each entry alone would fit.
        let err = catalog
            .reserve(&[reservation("P1", 3), reservation("P1", 3)])
            .unwrap_err();

        assert_eq!(err, DomainError::InsufficientStock);
        assert_eq!(catalog.quantity_of(&"P1".into()), Some(5));
    }

    #[test]
    fn order_store_assigns_distinct_ids() {
        let store = InMemoryOrderStore::new();
        let customer = Customer::new("C1", "Ada");

        let first = store.create(&customer, vec![]);
        let second = store.create(&customer, vec![]);

        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 2);
    }
}
