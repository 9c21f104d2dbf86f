//! # Chirpy Core
//!
//! Core business logic and domain layer for the Chirpy backend.
//! This crate contains domain entities, the authentication and session
//! credential services, repository interfaces, and error types that form
//! the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, RefreshToken, User};
pub use domain::value_objects::{LoginSession, RefreshedAccess};
pub use errors::{
    AuthError, AuthScheme, CredentialError, DomainError, DomainResult, PasswordError, TokenError,
};
pub use repositories::{TokenRepository, UserRepository};
pub use services::{
    AccessTokenCodec, AccountService, AccountServiceConfig, AuthService, AuthServiceConfig,
    PasswordService, RefreshTokenStore, TokenServiceConfig, WebhookOutcome,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockTokenRepository, MockUserRepository};
