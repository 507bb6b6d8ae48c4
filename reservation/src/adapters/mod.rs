//! Adapters
//!
//! Concrete implementations of domain ports shipped with the crate.

pub mod default_factory;

pub use default_factory::DefaultCustomerFactory;
