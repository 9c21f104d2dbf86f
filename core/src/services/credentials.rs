//! Extraction of credentials from an inbound `Authorization` header value
//!
//! Two schemes are understood: `Bearer <token>` for session callers and
//! `ApiKey <key>` for the payment provider webhook. The scheme is matched
//! ASCII case-insensitively and the credential is returned verbatim.

use crate::errors::{AuthScheme, CredentialError};

/// Extract the token from `Authorization: Bearer <token>`
///
/// # Errors
///
/// * `MissingHeader` - no header, or an empty one
/// * `MalformedHeader` - wrong scheme, no token, or whitespace inside the token
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, CredentialError> {
    extract_credential(header, AuthScheme::Bearer)
}

/// Extract the key from `Authorization: ApiKey <key>`
pub fn extract_api_key(header: Option<&str>) -> Result<&str, CredentialError> {
    extract_credential(header, AuthScheme::ApiKey)
}

fn extract_credential(header: Option<&str>, scheme: AuthScheme) -> Result<&str, CredentialError> {
    let header = header
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(CredentialError::MissingHeader { scheme })?;

    let malformed = CredentialError::MalformedHeader { scheme };

    let (prefix, rest) = header.split_once(char::is_whitespace).ok_or(malformed.clone())?;
    if !prefix.eq_ignore_ascii_case(scheme.as_str()) {
        return Err(malformed);
    }

    let credential = rest.trim_start();
    if credential.is_empty() || credential.contains(char::is_whitespace) {
        return Err(malformed);
    }

    Ok(credential)
}
