//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by login email (exact match)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Auth(AuthError::UserAlreadyExists))` - Email already taken
    /// * `Err(DomainError)` - Any other storage failure
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace a user's email and password hash
    ///
    /// # Returns
    /// * `Ok(Some(User))` - The updated user
    /// * `Ok(None)` - No user with that ID
    async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Set the premium flag
    ///
    /// # Returns
    /// * `Ok(true)` - User upgraded (or already upgraded)
    /// * `Ok(false)` - No user with that ID
    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Delete every user, returning how many were removed
    async fn delete_all(&self) -> Result<u64, DomainError>;
}
