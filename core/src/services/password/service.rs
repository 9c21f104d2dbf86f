//! bcrypt-backed password service

use chirpy_shared::config::PasswordConfig;

use crate::errors::PasswordError;

/// Hashes and verifies user passwords
///
/// Digests are self-describing bcrypt strings (`$2b$<cost>$<salt><hash>`),
/// so verification never needs the configured cost.
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(config: PasswordConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    /// Hash a plaintext password with a fresh random salt
    ///
    /// # Errors
    ///
    /// * `PasswordError::EmptyInput` - the password is empty
    /// * `PasswordError::HashingFailed` - bcrypt rejected the input or cost
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::EmptyInput);
        }

        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed {
            message: e.to_string(),
        })
    }

    /// Check a plaintext password against a stored digest
    ///
    /// # Errors
    ///
    /// * `PasswordError::CredentialMismatch` - the password does not match
    /// * `PasswordError::MalformedDigest` - the digest cannot be parsed
    pub fn verify_password(&self, password: &str, digest: &str) -> Result<(), PasswordError> {
        match bcrypt::verify(password, digest) {
            Ok(true) => Ok(()),
            Ok(false) => Err(PasswordError::CredentialMismatch),
            Err(_) => Err(PasswordError::MalformedDigest),
        }
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(PasswordConfig::default())
    }
}
