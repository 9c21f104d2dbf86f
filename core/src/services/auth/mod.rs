//! Session coordination module
//!
//! This module ties the credential components together:
//! - Login with email and password
//! - Access token refresh from a refresh token
//! - Refresh token revocation
//! - Access token authentication for protected routes

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
