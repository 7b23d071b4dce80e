use std::sync::Arc;

use serde::{Deserialize, Serialize};

use storefront_core::CustomerId;

/// Contact information kept on a customer record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Customer record as owned by the directory collaborator.
///
/// Order placement only cares about the identifier; the remaining attributes
/// ride along for callers that render the stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    #[serde(default)]
    pub contact: ContactInfo,
}

impl Customer {
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: ContactInfo::default(),
        }
    }
}

/// Read-only lookup capability over the externally-owned customer directory.
pub trait CustomerDirectory: Send + Sync {
    /// Resolve a customer by id; `None` when absent.
    fn find_by_id(&self, id: &CustomerId) -> Option<Customer>;
}

impl<S> CustomerDirectory for Arc<S>
where
    S: CustomerDirectory + ?Sized,
{
    fn find_by_id(&self, id: &CustomerId) -> Option<Customer> {
        (**self).find_by_id(id)
    }
}
