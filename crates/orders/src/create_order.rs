use serde::{Deserialize, Serialize};

use storefront_core::{CustomerId, DomainError, DomainResult, ProductId};
use storefront_customers::CustomerDirectory;
use storefront_products::{ProductCatalog, StockReservation};

use crate::order::{Order, OrderLine, OrderStore};

/// One requested line: which product and how many units.
///
/// Serializes with the wire names the storefront has always used (`id` for
/// the product identifier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRequest {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub quantity: u64,
}

/// Inbound request to place an order.
///
/// Absent fields deserialize to their empty values rather than failing: a
/// missing customer id behaves like an unknown customer and a missing line
/// list like an empty order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub customer_id: CustomerId,
    #[serde(rename = "products", default)]
    pub lines: Vec<LineRequest>,
}

/// Application service: place an order against the three collaborators.
///
/// Control flow is linear per request: resolve customer, resolve products,
/// validate the whole batch, reserve stock, persist. Validation never
/// mutates, and the reservation is a single atomic conditional decrement, so
/// a request that loses a concurrent race is rejected without leaving a
/// dangling order.
#[derive(Debug)]
pub struct CreateOrderService<C, P, O>
where
    C: CustomerDirectory,
    P: ProductCatalog,
    O: OrderStore,
{
    customers: C,
    catalog: P,
    orders: O,
}

impl<C, P, O> CreateOrderService<C, P, O>
where
    C: CustomerDirectory,
    P: ProductCatalog,
    O: OrderStore,
{
    pub fn new(customers: C, catalog: P, orders: O) -> Self {
        Self {
            customers,
            catalog,
            orders,
        }
    }

    /// Place an order.
    ///
    /// Rejections are terminal and leave no partial effects:
    /// - [`DomainError::NotFound`] — unknown (or empty) customer id
    /// - [`DomainError::InvalidProducts`] — lines that do not resolve
    ///   one-to-one against the catalog, or a zero quantity
    /// - [`DomainError::InsufficientStock`] — any line over available stock
    pub fn execute(&self, request: CreateOrderRequest) -> DomainResult<Order> {
        match self.place(request) {
            Ok(order) => {
                tracing::info!(
                    order_id = %order.id,
                    customer_id = %order.customer_id,
                    lines = order.lines.len(),
                    "order created"
                );
                Ok(order)
            }
            Err(err) => {
                tracing::debug!(%err, "order rejected");
                Err(err)
            }
        }
    }

    fn place(&self, request: CreateOrderRequest) -> DomainResult<Order> {
        let customer = self
            .customers
            .find_by_id(&request.customer_id)
            .ok_or(DomainError::NotFound)?;

        if request.lines.iter().any(|line| line.quantity == 0) {
            return Err(DomainError::InvalidProducts);
        }

        let ids: Vec<ProductId> = request
            .lines
            .iter()
            .map(|line| line.product_id.clone())
            .collect();
        let in_stock = self.catalog.find_all_by_id(&ids);

        // One resolved product per requested line. The catalog deduplicates,
        // so unknown ids and duplicate ids both surface as a count mismatch.
        if in_stock.len() != request.lines.len() {
            return Err(DomainError::InvalidProducts);
        }

        let requested_of = |id: &ProductId| -> u64 {
            request
                .lines
                .iter()
                .find(|line| &line.product_id == id)
                .map(|line| line.quantity)
                .unwrap_or(0)
        };

        // Whole-batch availability check before any mutation: if one line is
        // short, the entire order is rejected.
        if in_stock
            .iter()
            .any(|product| requested_of(&product.id) > product.quantity)
        {
            return Err(DomainError::InsufficientStock);
        }

        let lines: Vec<OrderLine> = in_stock
            .iter()
            .map(|product| OrderLine {
                product_id: product.id.clone(),
                quantity: requested_of(&product.id),
                unit_price: product.price,
            })
            .collect();

        // The pre-check above only classifies the rejection; this guarded
        // decrement is what holds under concurrent requests for the same
        // products.
        let reservations: Vec<StockReservation> = request
            .lines
            .iter()
            .map(|line| StockReservation {
                product_id: line.product_id.clone(),
                quantity: line.quantity,
            })
            .collect();
        self.catalog.reserve(&reservations)?;

        Ok(self.orders.create(&customer, lines))
    }
}
