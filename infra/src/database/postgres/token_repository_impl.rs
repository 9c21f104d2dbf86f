//! PostgreSQL implementation of the TokenRepository trait.
//!
//! Refresh tokens are stored under their own value as the primary key.
//! Revocation only ever sets `revoked_at`; rows are removed solely by the
//! cascade when their user is deleted.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use chirpy_core::domain::entities::token::RefreshToken;
use chirpy_core::errors::DomainError;
use chirpy_core::repositories::TokenRepository;

use crate::database::storage_error;

/// PostgreSQL implementation of TokenRepository
pub struct PgTokenRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgTokenRepository {
    /// Create a new PostgreSQL token repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert database row to RefreshToken entity
    fn row_to_token(row: &PgRow) -> Result<RefreshToken, DomainError> {
        Ok(RefreshToken {
            token: row
                .try_get("token")
                .map_err(|e| storage_error("Failed to get token", e))?,
            user_id: row
                .try_get("user_id")
                .map_err(|e| storage_error("Failed to get user_id", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| storage_error("Failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| storage_error("Failed to get updated_at", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| storage_error("Failed to get expires_at", e))?,
            revoked_at: row
                .try_get::<Option<DateTime<Utc>>, _>("revoked_at")
                .map_err(|e| storage_error("Failed to get revoked_at", e))?,
        })
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn insert(&self, token: RefreshToken) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (token, created_at, updated_at, user_id, expires_at, revoked_at)
            VALUES ($1, $2, $3, $4, $5, $6)
        "#;

        // A duplicate key is reported like any other storage failure
        sqlx::query(query)
            .bind(&token.token)
            .bind(token.created_at)
            .bind(token.updated_at)
            .bind(token.user_id)
            .bind(token.expires_at)
            .bind(token.revoked_at)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to save refresh token", e))?;

        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT token, created_at, updated_at, user_id, expires_at, revoked_at
            FROM refresh_tokens
            WHERE token = $1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find refresh token", e))?;

        result.as_ref().map(Self::row_to_token).transpose()
    }

    async fn mark_revoked(&self, token: &str) -> Result<bool, DomainError> {
        // COALESCE keeps the first revocation time on repeated calls
        let query = r#"
            UPDATE refresh_tokens
            SET revoked_at = COALESCE(revoked_at, NOW()),
                updated_at = CASE WHEN revoked_at IS NULL THEN NOW() ELSE updated_at END
            WHERE token = $1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to revoke refresh token", e))?;

        Ok(result.rows_affected() > 0)
    }
}
