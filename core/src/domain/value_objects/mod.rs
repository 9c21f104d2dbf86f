//! Value objects representing immutable domain concepts.

pub mod session;

// Re-export commonly used types
pub use session::{LoginSession, RefreshedAccess};
