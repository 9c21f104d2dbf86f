//! Account service implementation

use std::sync::Arc;

use chirpy_shared::config::Environment;
use constant_time_eq::constant_time_eq;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, CredentialError, DomainError};
use crate::repositories::UserRepository;
use crate::services::credentials::extract_api_key;
use crate::services::password::PasswordService;

use super::config::AccountServiceConfig;

/// Webhook event that grants the premium upgrade
pub const USER_UPGRADED_EVENT: &str = "user.upgraded";

/// What an accepted webhook call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// The user now has the premium upgrade
    Upgraded,
    /// The event is not one we act on
    Ignored,
}

/// Account service for registration and account changes
pub struct AccountService<U: UserRepository> {
    user_repository: Arc<U>,
    password_service: Arc<PasswordService>,
    config: AccountServiceConfig,
}

impl<U: UserRepository> AccountService<U> {
    pub fn new(
        user_repository: Arc<U>,
        password_service: Arc<PasswordService>,
        config: AccountServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            password_service,
            config,
        }
    }

    /// Register a new user
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Validation)` - Email is not an address
    /// * `Err(PasswordError::EmptyInput)` - Empty password
    /// * `Err(AuthError::UserAlreadyExists)` - Email already registered
    pub async fn register(&self, email: &str, password: &str) -> Result<User, DomainError> {
        validate_email(email)?;

        if self.user_repository.find_by_email(email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let hashed_password = self.password_service.hash_password(password)?;
        let user = self
            .user_repository
            .create(User::new(email.to_string(), hashed_password))
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Replace the email and password of an authenticated user
    ///
    /// Outstanding refresh tokens stay valid.
    pub async fn update_credentials(
        &self,
        user_id: Uuid,
        email: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        validate_email(email)?;

        let hashed_password = self.password_service.hash_password(password)?;
        let user = self
            .user_repository
            .update_credentials(user_id, email, &hashed_password)
            .await?
            .ok_or_else(|| user_not_found(user_id))?;

        info!(user_id = %user.id, "User credentials updated");
        Ok(user)
    }

    /// Handle a payment provider webhook call
    ///
    /// # Arguments
    ///
    /// * `authorization` - Raw `Authorization` header, `ApiKey <key>`
    /// * `event` - Event name from the payload
    /// * `user_id` - User the event refers to
    pub async fn upgrade_from_webhook(
        &self,
        authorization: Option<&str>,
        event: &str,
        user_id: Uuid,
    ) -> Result<WebhookOutcome, DomainError> {
        let key = extract_api_key(authorization)?;
        if !constant_time_eq(key.as_bytes(), self.config.webhook_key.as_bytes()) {
            warn!("Webhook rejected: API key mismatch");
            return Err(CredentialError::InvalidApiKey.into());
        }

        if event != USER_UPGRADED_EVENT {
            return Ok(WebhookOutcome::Ignored);
        }

        if !self.user_repository.upgrade_to_chirpy_red(user_id).await? {
            return Err(user_not_found(user_id));
        }

        info!(user_id = %user_id, "User upgraded to Chirpy Red");
        Ok(WebhookOutcome::Upgraded)
    }

    /// Delete all users; only allowed on a development platform
    pub async fn reset(&self, environment: Environment) -> Result<u64, DomainError> {
        if !environment.is_development() {
            warn!(platform = %environment, "Reset refused outside development");
            return Err(AuthError::Forbidden.into());
        }

        let deleted = self.user_repository.delete_all().await?;
        info!(deleted, "All users deleted");
        Ok(deleted)
    }
}

fn user_not_found(user_id: Uuid) -> DomainError {
    DomainError::NotFound {
        resource: format!("user {}", user_id),
    }
}

fn validate_email(email: &str) -> Result<(), DomainError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(DomainError::Validation {
            message: "email must be a valid address".to_string(),
        })
    }
}
