//! Argon2id implementation of [`PasswordHasher`].

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Argon2,
};

use common::{AppError, AppResult};

use crate::port::PasswordHasher;

/// Salted Argon2 hashes in PHC string format.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        // Unparseable hashes never match
        match PasswordHash::new(hash) {
            Ok(parsed) => Self::argon2()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash is malformed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("SecurePassword123!").unwrap();

        assert!(hasher.verify("SecurePassword123!", &hash));
        assert!(!hasher.verify("WrongPassword123", &hash));
    }

    #[test]
    fn test_same_password_different_salts() {
        let hasher = Argon2PasswordHasher::new();
        let first = hasher.hash("SamePassword123").unwrap();
        let second = hasher.hash("SamePassword123").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("SamePassword123", &first));
        assert!(hasher.verify("SamePassword123", &second));
    }

    #[test]
    fn test_malformed_hash_does_not_verify() {
        let hasher = Argon2PasswordHasher::new();
        assert!(!hasher.verify("anything", "not-a-phc-string"));
    }
}
