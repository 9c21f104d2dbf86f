//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, AuthScheme, CredentialError, PasswordError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Fatal persistence failure, surfaced to the caller unchanged
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Credential(#[from] CredentialError),
}

impl DomainError {
    /// Shorthand for wrapping a persistence failure
    pub fn storage(message: impl Into<String>) -> Self {
        DomainError::Storage {
            message: message.into(),
        }
    }

    /// Whether the failure is the server's fault rather than the caller's
    pub fn is_server_fault(&self) -> bool {
        match self {
            DomainError::Storage { .. } | DomainError::Internal { .. } => true,
            DomainError::Password(err) => matches!(
                err,
                PasswordError::MalformedDigest | PasswordError::HashingFailed { .. }
            ),
            DomainError::Token(err) => matches!(err, TokenError::TokenGenerationFailed),
            _ => false,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
