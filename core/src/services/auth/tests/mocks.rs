//! Token repositories with scripted behaviour for auth service tests

use async_trait::async_trait;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;
use crate::repositories::{MockTokenRepository, TokenRepository};

/// Rejects every insert as a storage failure
#[derive(Default)]
pub struct FailingTokenRepository {
    inner: MockTokenRepository,
}

#[async_trait]
impl TokenRepository for FailingTokenRepository {
    async fn insert(&self, _token: RefreshToken) -> Result<(), DomainError> {
        Err(DomainError::storage("connection refused"))
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        self.inner.find_by_token(token).await
    }

    async fn mark_revoked(&self, token: &str) -> Result<bool, DomainError> {
        self.inner.mark_revoked(token).await
    }
}

/// Revokes a token right after handing out a snapshot of it
///
/// Models a revoke that lands between the validation read and the access
/// token issue of a concurrent refresh.
#[derive(Default)]
pub struct RevokeAfterReadRepository {
    pub inner: MockTokenRepository,
}

#[async_trait]
impl TokenRepository for RevokeAfterReadRepository {
    async fn insert(&self, token: RefreshToken) -> Result<(), DomainError> {
        self.inner.insert(token).await
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let snapshot = self.inner.find_by_token(token).await?;
        self.inner.mark_revoked(token).await?;
        Ok(snapshot)
    }

    async fn mark_revoked(&self, token: &str) -> Result<bool, DomainError> {
        self.inner.mark_revoked(token).await
    }
}
