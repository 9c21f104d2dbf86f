//! Session credentials handed back to a caller after authentication.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// Result of a successful login
///
/// Either the whole pair is returned or nothing is; a caller never sees an
/// access token without its persisted refresh token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginSession {
    /// The authenticated user
    pub user: User,

    /// Signed access token
    pub access_token: String,

    /// Opaque refresh token (64 hex characters)
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// Result of exchanging a refresh token for a new access token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshedAccess {
    /// Newly signed access token
    pub access_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,
}
