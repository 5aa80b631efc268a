//! Error types for gradebook.
//!
//! This module defines all error types used throughout the gradebook crate.
//! The only domain error is capacity exhaustion on append; lookups signal
//! not-found with `Option` rather than an error.

use thiserror::Error;

/// The main error type for gradebook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Registry Errors ===
    /// The registry is at capacity and cannot accept another record.
    #[error("registry is full: cannot add more students (capacity {capacity})")]
    RegistryFull {
        /// The registry's fixed capacity.
        capacity: usize,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for gradebook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Check if this error indicates a full registry.
    ///
    /// Capacity exhaustion is non-fatal: callers print a notice and
    /// discard the attempted insertion.
    #[must_use]
    pub fn is_full(&self) -> bool {
        matches!(self, Self::RegistryFull { .. })
    }
}
