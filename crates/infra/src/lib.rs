//! Infrastructure layer: in-memory collaborator implementations and
//! process-wide telemetry setup.

pub mod memory;
pub mod telemetry;


pub use memory::{InMemoryCustomerDirectory, InMemoryOrderStore, InMemoryProductCatalog};
