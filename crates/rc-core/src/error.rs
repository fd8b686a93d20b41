//! # AppError
//!
//! Centralized error handling for the recoverly community pipeline.
//! Maps domain-specific failures to actionable error types.

use thiserror::Error;

/// The primary error type for all rc-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g., parent comment no longer in the local forest)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Validation failure (e.g., banned term in a comment, all-caps post body)
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Infrastructure failure (e.g., remote store write rejected)
    #[error("internal service error: {0}")]
    Internal(String),
}

/// A specialized Result type for community-pipeline logic.
pub type Result<T> = std::result::Result<T, AppError>;
