//! Main authentication service implementation

use std::sync::Arc;

use chrono::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::value_objects::session::{LoginSession, RefreshedAccess};
use crate::errors::{AuthError, DomainError, PasswordError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::credentials::extract_bearer_token;
use crate::services::password::PasswordService;
use crate::services::token::{AccessTokenCodec, RefreshTokenStore};

use super::config::AuthServiceConfig;

/// Authentication service coordinating login, refresh and revocation
pub struct AuthService<U, R>
where
    U: UserRepository,
    R: TokenRepository,
{
    /// User repository for credential lookup
    user_repository: Arc<U>,
    /// Password hashing and verification
    password_service: Arc<PasswordService>,
    /// Access token minting and validation
    access_tokens: Arc<AccessTokenCodec>,
    /// Refresh token persistence
    refresh_tokens: Arc<RefreshTokenStore<R>>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, R> AuthService<U, R>
where
    U: UserRepository,
    R: TokenRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user lookup
    /// * `password_service` - Password verification
    /// * `access_tokens` - Access token codec keyed by the signing secret
    /// * `refresh_tokens` - Refresh token store
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        password_service: Arc<PasswordService>,
        access_tokens: Arc<AccessTokenCodec>,
        refresh_tokens: Arc<RefreshTokenStore<R>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            password_service,
            access_tokens,
            refresh_tokens,
            config,
        }
    }

    /// Authenticate with email and password and open a session
    ///
    /// # Arguments
    ///
    /// * `email` - Login email
    /// * `password` - Plaintext password
    /// * `requested_ttl_seconds` - Optional access token lifetime; see
    ///   [`AuthServiceConfig::access_token_lifetime`]
    ///
    /// # Returns
    ///
    /// * `Ok(LoginSession)` - The user with a fresh access and refresh token
    /// * `Err(AuthError::UserNotFound)` - No user with that email
    /// * `Err(AuthError::InvalidCredentials)` - Wrong password
    /// * `Err(PasswordError::MalformedDigest)` - Stored digest is unusable
    ///
    /// No token is handed out unless both were created and the refresh
    /// token was persisted.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        requested_ttl_seconds: Option<i64>,
    ) -> Result<LoginSession, DomainError> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        match self
            .password_service
            .verify_password(password, &user.hashed_password)
        {
            Ok(()) => {}
            Err(PasswordError::CredentialMismatch) => {
                warn!(user_id = %user.id, "Login rejected: password mismatch");
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(e.into()),
        }

        let expires_in = self.config.access_token_lifetime(requested_ttl_seconds);
        let access_token = self
            .access_tokens
            .issue(user.id, Duration::seconds(expires_in))?;
        let refresh_token = self.refresh_tokens.issue(user.id).await?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginSession {
            user,
            access_token,
            refresh_token,
            expires_in,
        })
    }

    /// Exchange a refresh token for a new access token
    ///
    /// The refresh token is presented as `Authorization: Bearer <token>` and
    /// stays valid afterwards; it is not rotated.
    pub async fn refresh(
        &self,
        authorization: Option<&str>,
    ) -> Result<RefreshedAccess, DomainError> {
        let token = extract_bearer_token(authorization)?;
        let user_id = self.refresh_tokens.validate(token).await?;

        let expires_in = self.config.access_token_expiry_seconds;
        let access_token = self
            .access_tokens
            .issue(user_id, Duration::seconds(expires_in))?;

        info!(user_id = %user_id, "Access token refreshed");

        Ok(RefreshedAccess {
            access_token,
            expires_in,
        })
    }

    /// Revoke the refresh token presented as `Authorization: Bearer <token>`
    pub async fn revoke_session(&self, authorization: Option<&str>) -> Result<(), DomainError> {
        let token = extract_bearer_token(authorization)?;
        self.refresh_tokens.revoke(token).await
    }

    /// Resolve the user behind an `Authorization: Bearer <access token>` header
    pub fn authenticate(&self, authorization: Option<&str>) -> Result<Uuid, DomainError> {
        let token = extract_bearer_token(authorization)?;
        Ok(self.access_tokens.validate(token)?)
    }
}
