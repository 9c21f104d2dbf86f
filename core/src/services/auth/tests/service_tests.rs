//! Unit tests for authentication service

use std::sync::Arc;

use chirpy_shared::config::PasswordConfig;
use chrono::Duration;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, CredentialError, DomainError, PasswordError, TokenError};
use crate::repositories::{MockTokenRepository, MockUserRepository, TokenRepository};
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::password::PasswordService;
use crate::services::token::{AccessTokenCodec, RefreshTokenStore};

use super::mocks::{FailingTokenRepository, RevokeAfterReadRepository};

const SECRET: &str = "test-secret-key-for-testing-only";
const EMAIL: &str = "walt@breakingbad.com";
const PASSWORD: &str = "04234";

fn password_service() -> Arc<PasswordService> {
    Arc::new(PasswordService::new(PasswordConfig { bcrypt_cost: 4 }))
}

async fn seeded_users(passwords: &PasswordService) -> (Arc<MockUserRepository>, User) {
    let users = Arc::new(MockUserRepository::new());
    let user = User::new(EMAIL.to_string(), passwords.hash_password(PASSWORD).unwrap());
    users.add_user(user.clone()).await;
    (users, user)
}

fn build_service<R: TokenRepository>(
    users: Arc<MockUserRepository>,
    tokens: Arc<R>,
    passwords: Arc<PasswordService>,
) -> AuthService<MockUserRepository, R> {
    AuthService::new(
        users,
        passwords,
        Arc::new(AccessTokenCodec::new(SECRET)),
        Arc::new(RefreshTokenStore::new(tokens, Duration::hours(1440))),
        AuthServiceConfig::default(),
    )
}

async fn setup() -> (
    AuthService<MockUserRepository, MockTokenRepository>,
    Arc<MockTokenRepository>,
    User,
) {
    let passwords = password_service();
    let (users, user) = seeded_users(&passwords).await;
    let tokens = Arc::new(MockTokenRepository::new());
    let service = build_service(users, tokens.clone(), passwords);
    (service, tokens, user)
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[tokio::test]
async fn test_login_success() {
    let (service, tokens, user) = setup().await;

    let session = service.login(EMAIL, PASSWORD, None).await.unwrap();

    assert_eq!(session.user.id, user.id);
    assert_eq!(session.expires_in, 360);
    assert_eq!(session.refresh_token.len(), 64);
    assert_eq!(tokens.len().await, 1);

    let codec = AccessTokenCodec::new(SECRET);
    let claims = codec.decode_claims(&session.access_token).unwrap();
    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.exp - claims.iat, 360);
}

#[tokio::test]
async fn test_login_honours_shorter_requested_lifetime() {
    let (service, _, _) = setup().await;

    let session = service.login(EMAIL, PASSWORD, Some(60)).await.unwrap();

    let claims = AccessTokenCodec::new(SECRET)
        .decode_claims(&session.access_token)
        .unwrap();
    assert_eq!(session.expires_in, 60);
    assert_eq!(claims.exp - claims.iat, 60);
}

#[tokio::test]
async fn test_login_caps_longer_requested_lifetime() {
    let (service, _, _) = setup().await;

    let session = service.login(EMAIL, PASSWORD, Some(86_400)).await.unwrap();

    assert_eq!(session.expires_in, 360);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let (service, tokens, _) = setup().await;

    let result = service.login("nobody@example.com", PASSWORD, None).await;

    assert!(matches!(result, Err(DomainError::Auth(AuthError::UserNotFound))));
    assert!(tokens.is_empty().await);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (service, tokens, _) = setup().await;

    let result = service.login(EMAIL, "wrong", None).await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert!(tokens.is_empty().await);
}

#[tokio::test]
async fn test_login_malformed_stored_digest() {
    let users = Arc::new(MockUserRepository::new());
    users
        .add_user(User::new(EMAIL.to_string(), "plaintext-by-mistake".to_string()))
        .await;
    let tokens = Arc::new(MockTokenRepository::new());
    let service = build_service(users, tokens.clone(), password_service());

    let result = service.login(EMAIL, PASSWORD, None).await;

    assert!(matches!(
        result,
        Err(DomainError::Password(PasswordError::MalformedDigest))
    ));
    assert!(tokens.is_empty().await);
}

#[tokio::test]
async fn test_login_fails_when_refresh_token_cannot_be_stored() {
    let passwords = password_service();
    let (users, _) = seeded_users(&passwords).await;
    let service = build_service(users, Arc::new(FailingTokenRepository::default()), passwords);

    let result = service.login(EMAIL, PASSWORD, None).await;

    assert!(matches!(result, Err(DomainError::Storage { .. })));
}

#[tokio::test]
async fn test_refresh_issues_new_access_token() {
    let (service, _, user) = setup().await;
    let session = service.login(EMAIL, PASSWORD, None).await.unwrap();

    let refreshed = service
        .refresh(Some(&bearer(&session.refresh_token)))
        .await
        .unwrap();

    let codec = AccessTokenCodec::new(SECRET);
    let first = codec.decode_claims(&session.access_token).unwrap();
    let second = codec.decode_claims(&refreshed.access_token).unwrap();

    assert_eq!(codec.validate(&refreshed.access_token), Ok(user.id));
    assert!(second.iat >= first.iat);
    assert_eq!(refreshed.expires_in, 360);
}

#[tokio::test]
async fn test_refresh_does_not_rotate() {
    let (service, _, _) = setup().await;
    let session = service.login(EMAIL, PASSWORD, None).await.unwrap();
    let header = bearer(&session.refresh_token);

    service.refresh(Some(&header)).await.unwrap();

    assert!(service.refresh(Some(&header)).await.is_ok());
}

#[tokio::test]
async fn test_refresh_after_revoke_fails() {
    let (service, _, _) = setup().await;
    let session = service.login(EMAIL, PASSWORD, None).await.unwrap();
    let header = bearer(&session.refresh_token);

    service.revoke_session(Some(&header)).await.unwrap();

    let result = service.refresh(Some(&header)).await;
    assert!(matches!(result, Err(DomainError::Token(TokenError::TokenRevoked))));

    // Revoking twice is fine
    assert!(service.revoke_session(Some(&header)).await.is_ok());
}

#[tokio::test]
async fn test_refresh_with_access_token_fails() {
    let (service, _, _) = setup().await;
    let session = service.login(EMAIL, PASSWORD, None).await.unwrap();

    let result = service.refresh(Some(&bearer(&session.access_token))).await;

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::RefreshTokenNotFound))
    ));
}

#[tokio::test]
async fn test_refresh_without_header() {
    let (service, _, _) = setup().await;

    let result = service.refresh(None).await;

    assert!(matches!(
        result,
        Err(DomainError::Credential(CredentialError::MissingHeader { .. }))
    ));
}

#[tokio::test]
async fn test_revoke_unknown_token() {
    let (service, _, _) = setup().await;

    let result = service.revoke_session(Some("Bearer deadbeef")).await;

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::RefreshTokenNotFound))
    ));
}

#[tokio::test]
async fn test_refresh_racing_revoke_still_succeeds_once() {
    let passwords = password_service();
    let (users, user) = seeded_users(&passwords).await;
    let tokens = Arc::new(RevokeAfterReadRepository::default());
    let service = build_service(users, tokens.clone(), passwords);

    let session = service.login(EMAIL, PASSWORD, None).await.unwrap();
    let header = bearer(&session.refresh_token);

    // Validation read the token before the revoke landed
    let refreshed = service.refresh(Some(&header)).await.unwrap();
    assert_eq!(
        AccessTokenCodec::new(SECRET).validate(&refreshed.access_token),
        Ok(user.id)
    );

    let record = tokens
        .inner
        .find_by_token(&session.refresh_token)
        .await
        .unwrap()
        .unwrap();
    assert!(record.is_revoked());

    let result = service.refresh(Some(&header)).await;
    assert!(matches!(result, Err(DomainError::Token(TokenError::TokenRevoked))));
}

#[tokio::test]
async fn test_authenticate() {
    let (service, _, user) = setup().await;
    let session = service.login(EMAIL, PASSWORD, None).await.unwrap();

    assert_eq!(
        service.authenticate(Some(&bearer(&session.access_token))).unwrap(),
        user.id
    );
}

#[tokio::test]
async fn test_authenticate_rejects_foreign_token() {
    let (service, _, _) = setup().await;
    let foreign = AccessTokenCodec::new("another-secret")
        .issue(Uuid::new_v4(), Duration::seconds(60))
        .unwrap();

    let result = service.authenticate(Some(&bearer(&foreign)));

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[tokio::test]
async fn test_authenticate_rejects_refresh_token() {
    let (service, _, _) = setup().await;
    let session = service.login(EMAIL, PASSWORD, None).await.unwrap();

    let result = service.authenticate(Some(&bearer(&session.refresh_token)));

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidTokenFormat))
    ));
}
