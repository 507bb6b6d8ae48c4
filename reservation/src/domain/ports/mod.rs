//! Domain ports (traits)
//!
//! Port traits define the collaborators the application layer depends on.
//! Production code and tests supply their own implementations.

pub mod customer_dao;
pub mod customer_factory;

pub use customer_dao::CustomerDao;
pub use customer_factory::CustomerFactory;

#[cfg(test)]
pub use customer_dao::MockCustomerDao;
#[cfg(test)]
pub use customer_factory::MockCustomerFactory;
