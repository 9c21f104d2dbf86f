//! Shared configuration and response types for the Chirpy server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON error response structure

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, JwtConfig, PasswordConfig,
    ServerConfig, WebhookConfig,
};
pub use errors::{error_codes, ErrorResponse};
