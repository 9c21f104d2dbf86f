//! Shared setup for the API integration tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chirpy_api::app::AppState;
use chirpy_core::domain::value_objects::session::LoginSession;
use chirpy_core::services::{
    AccessTokenCodec, AccountService, AccountServiceConfig, AuthService, AuthServiceConfig,
    PasswordService, RefreshTokenStore,
};
use chirpy_core::{MockTokenRepository, MockUserRepository};
use chirpy_shared::config::{Environment, PasswordConfig};
use chrono::Duration;

pub const JWT_SECRET: &str = "integration-test-secret";
pub const WEBHOOK_KEY: &str = "f271c81ff7084ee5b99a5091b42d486e";

pub type TestState = AppState<MockUserRepository, MockTokenRepository>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub users: Arc<MockUserRepository>,
    pub tokens: Arc<MockTokenRepository>,
    pub access_tokens: Arc<AccessTokenCodec>,
}

impl TestContext {
    /// Register a user through the account service
    pub async fn register(&self, email: &str, password: &str) -> chirpy_core::User {
        self.state
            .account_service
            .register(email, password)
            .await
            .unwrap()
    }

    /// Register a user and open a session for them
    pub async fn login(&self, email: &str, password: &str) -> LoginSession {
        self.register(email, password).await;
        self.state
            .auth_service
            .login(email, password, None)
            .await
            .unwrap()
    }
}

pub fn setup(environment: Environment) -> TestContext {
    let users = Arc::new(MockUserRepository::new());
    let tokens = Arc::new(MockTokenRepository::new());
    let passwords = Arc::new(PasswordService::new(PasswordConfig { bcrypt_cost: 4 }));
    let access_tokens = Arc::new(AccessTokenCodec::new(JWT_SECRET));
    let refresh_tokens = Arc::new(RefreshTokenStore::new(tokens.clone(), Duration::hours(1440)));

    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        passwords.clone(),
        access_tokens.clone(),
        refresh_tokens,
        AuthServiceConfig::default(),
    ));
    let account_service = Arc::new(AccountService::new(
        users.clone(),
        passwords,
        AccountServiceConfig {
            webhook_key: WEBHOOK_KEY.to_string(),
        },
    ));

    TestContext {
        state: web::Data::new(AppState::new(auth_service, account_service, environment)),
        users,
        tokens,
        access_tokens,
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub fn api_key(key: &str) -> String {
    format!("ApiKey {}", key)
}
