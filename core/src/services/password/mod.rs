//! Password hashing and verification

mod service;

pub use service::PasswordService;
