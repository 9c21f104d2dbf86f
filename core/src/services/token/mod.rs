//! Token service module for session credentials
//!
//! This module handles:
//! - HS256 access token minting and validation
//! - Opaque refresh token issuance, validation and revocation

mod access;
mod config;
mod refresh;

#[cfg(test)]
mod tests;

pub use access::AccessTokenCodec;
pub use config::TokenServiceConfig;
pub use refresh::{generate_refresh_token, RefreshTokenStore};
