//! Configuration for the authentication service

use chirpy_shared::config::JwtConfig;

use crate::domain::entities::token::ACCESS_TOKEN_EXPIRY_SECONDS;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Access token lifetime used when the caller asks for none, and the
    /// upper bound on what a caller may ask for
    pub access_token_expiry_seconds: i64,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            access_token_expiry_seconds: ACCESS_TOKEN_EXPIRY_SECONDS,
        }
    }
}

impl AuthServiceConfig {
    /// Access token lifetime for a login that requested `requested` seconds
    ///
    /// A positive request shorter than the default is honoured. Anything
    /// else (none, zero, negative, or longer) gets the default.
    pub fn access_token_lifetime(&self, requested: Option<i64>) -> i64 {
        match requested {
            Some(seconds) if seconds > 0 && seconds < self.access_token_expiry_seconds => seconds,
            _ => self.access_token_expiry_seconds,
        }
    }
}

impl From<&JwtConfig> for AuthServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            access_token_expiry_seconds: config.access_token_expiry,
        }
    }
}
