//! Customer construction port

use crate::domain::entities::Customer;

/// Produces new customer entities
///
/// Services never call `Customer::new` directly; they ask the injected
/// factory, so whatever it hands out is what the service works with.
#[cfg_attr(test, mockall::automock)]
pub trait CustomerFactory: Send + Sync {
    fn new_customer(&self) -> Customer;
}
