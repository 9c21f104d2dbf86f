//! Session endpoints: login, refresh and revoke

pub mod login;
pub mod refresh;
pub mod revoke;
