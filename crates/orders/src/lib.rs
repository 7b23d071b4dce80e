//! Orders domain module.
//!
//! Order aggregate, the order-store capability, and the order-creation
//! application service that coordinates the customer, catalog, and store
//! collaborators.

pub mod create_order;
pub mod order;

pub use create_order::{CreateOrderRequest, CreateOrderService, LineRequest};
pub use order::{Order, OrderLine, OrderStore};
