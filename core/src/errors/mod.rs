//! Domain-specific error types and error handling.

mod domain_error;

// Re-export all error types and utilities
pub use domain_error::{
    extract_chinese_message, extract_english_message, RegistrationError, VerificationError,
};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    /// Field-level validation failure; `message` carries the joined,
    /// user-facing text
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Ephemeral store unreachable or a batched write failed
    #[error("Store error: {message}")]
    Store { message: String },

    /// User store (database) failure
    #[error("Database error: {message}")]
    Database { message: String },

    /// Anything else that should never reach the user verbatim
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

impl DomainError {
    /// True for failures the caller can correct by changing the request
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::Validation { .. }
                | DomainError::Verification(_)
                | DomainError::Registration(_)
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_bridge_keeps_message() {
        let err: DomainError = VerificationError::RateLimited.into();
        assert!(err.to_string().contains("过于频繁"));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_store_error_is_not_client_error() {
        let err = DomainError::Store {
            message: "pipeline failed".to_string(),
        };
        assert!(!err.is_client_error());
    }
}
