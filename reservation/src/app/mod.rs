//! Application layer
//!
//! Services coordinating domain entities and ports.

pub mod customer_manager;

pub use customer_manager::CustomerManager;
