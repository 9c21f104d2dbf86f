//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Chirpy backend,
//! following Clean Architecture principles. It provides the PostgreSQL
//! implementations of the repository traits declared in `chirpy_core`.
//!
//! ## Architecture
//!
//! - **Database**: connection pool management and migrations
//! - **Repositories**: `PgUserRepository` and `PgTokenRepository` using SQLx

/// Database module - PostgreSQL implementations using SQLx
pub mod database;

pub use database::{DatabasePool, PgTokenRepository, PgUserRepository, PoolStatistics};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
