//! User entity representing a registered Chirpy account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Login email, unique across users
    pub email: String,

    /// bcrypt digest of the user's password
    #[serde(skip_serializing, default)]
    pub hashed_password: String,

    /// Whether the user has the Chirpy Red premium upgrade
    pub is_chirpy_red: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance from an already hashed password
    pub fn new(email: String, hashed_password: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            hashed_password,
            is_chirpy_red: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the login credentials
    pub fn set_credentials(&mut self, email: String, hashed_password: String) {
        self.email = email;
        self.hashed_password = hashed_password;
        self.updated_at = Utc::now();
    }

    /// Grants the premium upgrade
    pub fn upgrade_to_chirpy_red(&mut self) {
        self.is_chirpy_red = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let user = User::new("walt@breakingbad.com".to_string(), "$2b$10$hash".to_string());

        assert_eq!(user.email, "walt@breakingbad.com");
        assert!(!user.is_chirpy_red);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_serialization_hides_password_hash() {
        let user = User::new("walt@breakingbad.com".to_string(), "$2b$10$hash".to_string());
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("hashed_password").is_none());
        assert_eq!(json["email"], "walt@breakingbad.com");
    }

    #[test]
    fn test_upgrade_to_chirpy_red() {
        let mut user = User::new("a@b.com".to_string(), "hash".to_string());
        user.upgrade_to_chirpy_red();

        assert!(user.is_chirpy_red);
        assert!(user.updated_at >= user.created_at);
    }
}
