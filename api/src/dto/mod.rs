//! Data Transfer Objects for API requests and responses

pub mod auth_dto;
pub mod user_dto;
pub mod webhook_dto;

pub use auth_dto::{LoginRequest, LoginResponse, RefreshResponse};
pub use user_dto::{UserCredentialsRequest, UserResponse};
pub use webhook_dto::{WebhookData, WebhookRequest};
