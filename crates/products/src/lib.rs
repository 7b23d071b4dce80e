//! Products domain module.
//!
//! Product record plus the catalog capability (lookup and atomic stock
//! reservation) the order flow depends on (no IO, no HTTP, no storage).

pub mod product;

pub use product::{Product, ProductCatalog, StockReservation};
