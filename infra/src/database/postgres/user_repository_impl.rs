//! PostgreSQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use chirpy_core::domain::entities::user::User;
use chirpy_core::errors::{AuthError, DomainError};
use chirpy_core::repositories::UserRepository;

use crate::database::{is_unique_violation, storage_error};

const USER_COLUMNS: &str = "id, created_at, updated_at, email, hashed_password, is_chirpy_red";

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PostgreSQL user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| storage_error("Failed to get id", e))?,
            email: row
                .try_get("email")
                .map_err(|e| storage_error("Failed to get email", e))?,
            hashed_password: row
                .try_get("hashed_password")
                .map_err(|e| storage_error("Failed to get hashed_password", e))?,
            is_chirpy_red: row
                .try_get("is_chirpy_red")
                .map_err(|e| storage_error("Failed to get is_chirpy_red", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| storage_error("Failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| storage_error("Failed to get updated_at", e))?,
        })
    }

    /// Map a write failure, turning a taken email into `UserAlreadyExists`
    fn map_write_error(context: &str, error: sqlx::Error) -> DomainError {
        if is_unique_violation(&error) {
            AuthError::UserAlreadyExists.into()
        } else {
            storage_error(context, error)
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find user by email", e))?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find user by id", e))?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = format!(
            r#"
            INSERT INTO users (id, created_at, updated_at, email, hashed_password, is_chirpy_red)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(user.id)
            .bind(user.created_at)
            .bind(user.updated_at)
            .bind(&user.email)
            .bind(&user.hashed_password)
            .bind(user.is_chirpy_red)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::map_write_error("Failed to create user", e))?;

        Self::row_to_user(&row)
    }

    async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<Option<User>, DomainError> {
        let query = format!(
            r#"
            UPDATE users
            SET email = $2, hashed_password = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id)
            .bind(email)
            .bind(hashed_password)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::map_write_error("Failed to update user credentials", e))?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE users SET is_chirpy_red = TRUE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to upgrade user", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to delete users", e))?;

        Ok(result.rows_affected())
    }
}
