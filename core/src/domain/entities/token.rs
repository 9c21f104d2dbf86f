//! Token entities for session credentials.
//!
//! Access tokens are self-contained JWTs described by [`Claims`]; they are
//! never stored. Refresh tokens are opaque random strings persisted as
//! [`RefreshToken`] records.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token lifetime (6 minutes)
pub const ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 360;

/// Refresh token lifetime (60 days)
pub const REFRESH_TOKEN_EXPIRY_HOURS: i64 = 1440;

/// Number of random bytes in a refresh token before hex encoding
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// JWT issuer
pub const JWT_ISSUER: &str = "chirpy";

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    pub iss: String,

    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for an access token issued now
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `ttl` - How long the token stays valid
    pub fn new_access_token(user_id: Uuid, ttl: Duration) -> Self {
        Self::issued_at(user_id, Utc::now(), ttl)
    }

    /// Creates claims with an explicit issue time
    pub fn issued_at(user_id: Uuid, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let expiry = issued_at + ttl;

        Self {
            iss: JWT_ISSUER.to_string(),
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Gets the user ID from the claims
    ///
    /// # Returns
    ///
    /// `Ok(Uuid)` if the subject can be parsed as a UUID, `Err` otherwise
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token record stored by the persistence layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Opaque token value; unique, acts as the primary key
    pub token: String,

    /// User ID this token belongs to
    pub user_id: Uuid,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last change to the record
    pub updated_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Set once when the token is revoked, never cleared
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// Creates a new refresh token record
    ///
    /// # Arguments
    ///
    /// * `token` - The opaque token value
    /// * `user_id` - The owning user's UUID
    /// * `ttl` - Lifetime measured from now
    pub fn new(token: String, user_id: Uuid, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            token,
            user_id,
            created_at: now,
            updated_at: now,
            expires_at: now + ttl,
            revoked_at: None,
        }
    }

    /// Checks if the refresh token has expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Checks if the refresh token has been revoked
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Revokes the refresh token
    ///
    /// The first revocation time is kept; revoking again is a no-op.
    pub fn revoke(&mut self) {
        if self.revoked_at.is_none() {
            let now = Utc::now();
            self.revoked_at = Some(now);
            self.updated_at = now;
        }
    }
}
