//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Signing secret, token lifetimes, password cost and webhook key
//! - `database` - Database connection and pool configuration
//! - `environment` - Platform detection (development vs production)
//! - `server` - HTTP server bind configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, PasswordConfig, WebhookConfig};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
///
/// Built once at startup and handed to the services that need it.
/// Nothing in the workspace reads configuration from global state.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Platform the process runs on
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
        }
    }

    /// Configuration problems that should stop the process from starting
    ///
    /// Returns a list of human-readable messages; empty means the
    /// configuration is usable.
    pub fn startup_problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.auth.jwt.secret.is_empty() {
            problems.push("JWT_SECRET must be set".to_string());
        } else if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            problems.push(
                "JWT_SECRET must not use the development default in production".to_string(),
            );
        }

        if self.auth.jwt.access_token_expiry <= 0 {
            problems.push(
                "JWT_ACCESS_TOKEN_EXPIRY must be a positive number of seconds".to_string(),
            );
        }

        if self.auth.jwt.refresh_token_expiry <= 0 {
            problems.push(
                "JWT_REFRESH_TOKEN_EXPIRY must be a positive number of seconds".to_string(),
            );
        }

        if self.auth.webhook.polka_key.is_empty() {
            problems.push("POLKA_KEY must be set".to_string());
        }

        if self.database.url.is_empty() {
            problems.push("DB_URL must be set".to_string());
        }

        problems
    }
}
