//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Request-level rejection raised while placing an order.
///
/// Every variant is a client fault (bad input / business-rule violation),
/// terminal for the request, and carries its user-facing message. None are
/// retryable; infrastructure faults belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The referenced customer does not exist (an empty id counts as absent).
    #[error("User not found")]
    NotFound,

    /// The requested lines do not resolve one-to-one against the catalog:
    /// unknown id, duplicate id, or a zero quantity.
    #[error("Invalid products")]
    InvalidProducts,

    /// At least one line requests more units than are currently in stock.
    #[error("Products with insufficient stock")]
    InsufficientStock,
}
