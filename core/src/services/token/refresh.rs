//! Opaque refresh token store

use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::entities::token::{RefreshToken, REFRESH_TOKEN_BYTES};
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;

/// Generates a fresh refresh token value
///
/// 32 bytes from the operating system CSPRNG, hex-encoded to 64 lowercase
/// characters.
pub fn generate_refresh_token() -> Result<String, TokenError> {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|_| TokenError::TokenGenerationFailed)?;
    Ok(hex::encode(bytes))
}

/// Issues, validates and revokes refresh tokens through a `TokenRepository`
pub struct RefreshTokenStore<R: TokenRepository> {
    repository: Arc<R>,
    ttl: Duration,
}

impl<R: TokenRepository> RefreshTokenStore<R> {
    /// Creates a store whose tokens live for `ttl`
    pub fn new(repository: Arc<R>, ttl: Duration) -> Self {
        Self { repository, ttl }
    }

    /// Lifetime given to newly issued tokens
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues and persists a new refresh token for `user_id`
    ///
    /// A storage failure, including a duplicate key, is returned as is and
    /// never retried.
    pub async fn issue(&self, user_id: Uuid) -> Result<String, DomainError> {
        let token = generate_refresh_token()?;

        self.repository
            .insert(RefreshToken::new(token.clone(), user_id, self.ttl))
            .await?;

        debug!(user_id = %user_id, "Refresh token issued");
        Ok(token)
    }

    /// Validates a refresh token and returns its owner
    ///
    /// Checks run in order: existence, expiry, revocation.
    pub async fn validate(&self, token: &str) -> Result<Uuid, DomainError> {
        let record = self
            .repository
            .find_by_token(token)
            .await?
            .ok_or(TokenError::RefreshTokenNotFound)?;

        if record.is_expired_at(Utc::now()) {
            return Err(TokenError::RefreshTokenExpired.into());
        }

        if record.is_revoked() {
            return Err(TokenError::TokenRevoked.into());
        }

        Ok(record.user_id)
    }

    /// Revokes a refresh token
    ///
    /// Revoking an already revoked token succeeds and keeps the original
    /// revocation time.
    pub async fn revoke(&self, token: &str) -> Result<(), DomainError> {
        if !self.repository.mark_revoked(token).await? {
            return Err(TokenError::RefreshTokenNotFound.into());
        }

        info!("Refresh token revoked");
        Ok(())
    }
}
