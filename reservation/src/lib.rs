//! Reservation customers
//!
//! Customer lookup and creation for the reservation system, arranged as
//! ports and adapters: the `CustomerManager` service depends only on the
//! `CustomerDao` and `CustomerFactory` ports, so both collaborators can be
//! swapped for substitutes in tests.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;



pub use adapters::DefaultCustomerFactory;
pub use app::CustomerManager;
pub use config::Config;
pub use domain::entities::Customer;
pub use domain::ports::{CustomerDao, CustomerFactory};
pub use error::{AppError, ConfigError, DomainError};
