//! Business services containing the authentication and account use cases.

pub mod account;
pub mod auth;
pub mod credentials;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use account::{AccountService, AccountServiceConfig, WebhookOutcome, USER_UPGRADED_EVENT};
pub use auth::{AuthService, AuthServiceConfig};
pub use credentials::{extract_api_key, extract_bearer_token};
pub use password::PasswordService;
pub use token::{AccessTokenCodec, RefreshTokenStore, TokenServiceConfig};
