//! # Chirpy API
//!
//! HTTP surface of the Chirpy backend: account registration, login,
//! refresh token exchange and revocation, the payment provider webhook
//! and the development reset endpoint.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
