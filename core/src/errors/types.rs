//! Error types for authentication, tokens, passwords and credential headers
//!
//! Each enum keeps its variants distinct for diagnostics even where the
//! HTTP layer collapses several of them into a single 401 response.

use std::fmt;

use chirpy_shared::errors::{error_codes, ErrorResponse};
use thiserror::Error;

/// Authorization header scheme a caller was expected to present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>` used by session callers
    Bearer,
    /// `Authorization: ApiKey <key>` used by the upgrade webhook
    ApiKey,
}

impl AuthScheme {
    /// Scheme literal as it appears in the header
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthScheme::Bearer => "Bearer",
            AuthScheme::ApiKey => "ApiKey",
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account-level authentication errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Operation not permitted on this platform")]
    Forbidden,
}

/// Access and refresh token errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token subject is not a valid user id")]
    MalformedSubject,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Refresh token not found")]
    RefreshTokenNotFound,

    #[error("Refresh token expired")]
    RefreshTokenExpired,

    #[error("Token revoked")]
    TokenRevoked,
}

/// Password hashing and verification errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password is empty")]
    EmptyInput,

    #[error("Stored password digest is malformed")]
    MalformedDigest,

    #[error("Password does not match")]
    CredentialMismatch,

    #[error("Password hashing failed: {message}")]
    HashingFailed { message: String },
}

/// Authorization header extraction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Authorization header is missing (expected {scheme})")]
    MissingHeader { scheme: AuthScheme },

    #[error("Authorization header is malformed (expected {scheme} <value>)")]
    MalformedHeader { scheme: AuthScheme },

    #[error("API key is invalid")]
    InvalidApiKey,
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            // Unknown email and wrong password look the same to the caller
            AuthError::UserNotFound | AuthError::InvalidCredentials => {
                return ErrorResponse::new(
                    error_codes::INVALID_CREDENTIALS,
                    AuthError::InvalidCredentials.to_string(),
                );
            }
            AuthError::UserAlreadyExists => error_codes::CONFLICT,
            AuthError::Forbidden => error_codes::FORBIDDEN,
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::InvalidSignature => error_codes::TOKEN_INVALID_SIGNATURE,
            TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
            TokenError::MalformedSubject
            | TokenError::InvalidTokenFormat
            | TokenError::InvalidClaims => error_codes::TOKEN_MALFORMED,
            TokenError::TokenGenerationFailed => error_codes::INTERNAL_ERROR,
            TokenError::RefreshTokenNotFound => error_codes::REFRESH_TOKEN_NOT_FOUND,
            TokenError::RefreshTokenExpired => error_codes::REFRESH_TOKEN_EXPIRED,
            TokenError::TokenRevoked => error_codes::TOKEN_REVOKED,
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

impl From<CredentialError> for ErrorResponse {
    fn from(err: CredentialError) -> Self {
        let (error_code, scheme) = match &err {
            CredentialError::MissingHeader { scheme } => {
                (error_codes::MISSING_AUTHORIZATION, Some(*scheme))
            }
            CredentialError::MalformedHeader { scheme } => {
                (error_codes::MALFORMED_AUTHORIZATION, Some(*scheme))
            }
            CredentialError::InvalidApiKey => (error_codes::INVALID_API_KEY, None),
        };

        let response = ErrorResponse::new(error_code, err.to_string());
        match scheme {
            Some(scheme) => response.add_detail("expected_scheme", scheme.as_str()),
            None => response,
        }
    }
}

impl From<PasswordError> for ErrorResponse {
    fn from(err: PasswordError) -> Self {
        let error_code = match &err {
            PasswordError::EmptyInput => error_codes::VALIDATION_ERROR,
            PasswordError::CredentialMismatch => error_codes::INVALID_CREDENTIALS,
            PasswordError::MalformedDigest | PasswordError::HashingFailed { .. } => {
                error_codes::INTERNAL_ERROR
            }
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
