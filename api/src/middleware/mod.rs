//! Middleware for request authentication and CORS

pub mod auth;
pub mod cors;

pub use auth::{authorization_header, AuthContext, Authenticator, JwtAuth};
pub use cors::create_cors;
