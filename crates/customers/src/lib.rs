//! Customers domain module.
//!
//! Customer record plus the read-only directory capability the order flow
//! depends on (no IO, no HTTP, no storage).

pub mod customer;

pub use customer::{ContactInfo, Customer, CustomerDirectory};
