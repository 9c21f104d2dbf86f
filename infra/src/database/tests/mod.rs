//! Database tests
//!
//! Tests marked `#[ignore]` need a PostgreSQL instance reachable through
//! `DB_URL` or `DATABASE_URL`.
