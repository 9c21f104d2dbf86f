//! Account management module
//!
//! Registration, credential updates, the premium upgrade webhook and the
//! development-only reset.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AccountServiceConfig;
pub use service::{AccountService, WebhookOutcome, USER_UPGRADED_EVENT};
