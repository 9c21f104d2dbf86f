//! Configuration for the token services

use chirpy_shared::config::JwtConfig;
use chrono::Duration;

use crate::domain::entities::token::REFRESH_TOKEN_EXPIRY_HOURS;

/// Configuration for the token services
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Refresh token expiry in seconds
    pub refresh_token_expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: JwtConfig::default().secret,
            refresh_token_expiry_seconds: REFRESH_TOKEN_EXPIRY_HOURS * 3600,
        }
    }
}

impl TokenServiceConfig {
    pub fn refresh_token_ttl(&self) -> Duration {
        Duration::seconds(self.refresh_token_expiry_seconds)
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            refresh_token_expiry_seconds: config.refresh_token_expiry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_jwt_config() {
        let jwt = JwtConfig::new("s3cret");
        let config = TokenServiceConfig::from(&jwt);

        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.refresh_token_ttl(), Duration::hours(1440));
    }

    #[test]
    fn test_refresh_ttl_keeps_partial_hours() {
        let mut jwt = JwtConfig::new("s3cret");
        jwt.refresh_token_expiry = 1800;
        assert_eq!(TokenServiceConfig::from(&jwt).refresh_token_ttl(), Duration::minutes(30));

        jwt.refresh_token_expiry = 5400;
        assert_eq!(TokenServiceConfig::from(&jwt).refresh_token_ttl(), Duration::seconds(5400));
    }

    #[test]
    fn test_default_matches_policy() {
        assert_eq!(TokenServiceConfig::default().refresh_token_ttl(), Duration::hours(1440));
    }
}
