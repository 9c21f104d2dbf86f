//! HS256 access token codec

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::errors::TokenError;

/// Mints and validates signed access tokens
///
/// Stateless: holds only the keys derived from the signing secret, so a
/// single instance can be shared freely between request handlers.
pub struct AccessTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AccessTokenCodec {
    /// Creates a codec keyed by the shared signing secret
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issues an access token for `user_id` valid for `ttl` from now
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact JWT
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed
    pub fn issue(&self, user_id: Uuid, ttl: Duration) -> Result<String, TokenError> {
        let claims = Claims::new_access_token(user_id, ttl);
        self.encode_claims(&claims)
    }

    /// Validates an access token and returns the user it was issued to
    ///
    /// # Returns
    ///
    /// * `Ok(Uuid)` - The subject of a valid token
    /// * `Err(TokenError::InvalidSignature)` - Not signed with this secret
    /// * `Err(TokenError::TokenExpired)` - Past its expiry
    /// * `Err(TokenError::MalformedSubject)` - Subject is not a user id
    /// * `Err(TokenError::InvalidClaims)` - Wrong issuer or missing claims
    /// * `Err(TokenError::InvalidTokenFormat)` - Not a JWT at all
    pub fn validate(&self, token: &str) -> Result<Uuid, TokenError> {
        let claims = self.decode_claims(token)?;
        claims.user_id().map_err(|_| TokenError::MalformedSubject)
    }

    /// Decodes and verifies a token, returning the full claim set
    pub fn decode_claims(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidIssuer | ErrorKind::MissingRequiredClaim(_) => {
                    TokenError::InvalidClaims
                }
                _ => TokenError::InvalidTokenFormat,
            })
    }

    /// Signs an arbitrary claim set
    pub(crate) fn encode_claims(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed)
    }
}
