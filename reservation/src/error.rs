//! Error types for the reservation crate
//!
//! - `DomainError`: errors raised by port implementations
//! - `AppError`: errors surfaced by application services (wraps domain errors)
//! - `ConfigError`: invalid environment configuration

use thiserror::Error;

/// Domain layer errors - raised by port implementations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Application layer errors - returned by services
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
