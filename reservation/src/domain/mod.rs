//! Domain layer
//!
//! - `entities`: the customer record
//! - `ports`: traits for collaborators the application layer depends on

pub mod entities;
pub mod ports;
