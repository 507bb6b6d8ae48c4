//! Customer lookup port

use async_trait::async_trait;

use crate::domain::entities::Customer;
use crate::error::DomainError;

/// Data access for customers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerDao: Send + Sync {
    /// Find a customer by exact first name. `Ok(None)` when nobody matches.
    async fn find_by_first_name(&self, first_name: &str) -> Result<Option<Customer>, DomainError>;
}
