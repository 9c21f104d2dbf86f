//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken persistence operations
///
/// The token value itself is the key. Records are never physically deleted
/// here; revocation only sets `revoked_at`.
///
/// Each call must be atomic for a single record. Nothing above this trait
/// relies on multi-record transactions.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a freshly issued refresh token
    ///
    /// # Returns
    /// * `Ok(())` - Token stored
    /// * `Err(DomainError::Storage)` - Insert failed, including a duplicate key
    ///
    /// # Example
    /// ```no_run
    /// # use chrono::Duration;
    /// # use uuid::Uuid;
    /// # use chirpy_core::repositories::TokenRepository;
    /// # use chirpy_core::domain::entities::token::RefreshToken;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let token = RefreshToken::new("ab12...".to_string(), Uuid::new_v4(), Duration::hours(1440));
    /// repo.insert(token).await?;
    /// # Ok(())
    /// # }
    /// ```
    async fn insert(&self, token: RefreshToken) -> Result<(), DomainError>;

    /// Find a refresh token record by its value
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Token found, whatever its expiry or revocation state
    /// * `Ok(None)` - No such token
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Mark a refresh token as revoked
    ///
    /// An already revoked token keeps its original `revoked_at`.
    ///
    /// # Returns
    /// * `Ok(true)` - Token exists and is now revoked
    /// * `Ok(false)` - Token not found
    /// * `Err(DomainError)` - Storage error occurred
    async fn mark_revoked(&self, token: &str) -> Result<bool, DomainError>;
}
