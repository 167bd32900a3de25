//! Password hashing port.

use common::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One-way password hashing.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain text password for storage
    fn hash(&self, password: &str) -> AppResult<String>;

    /// Check a plain text password against a stored hash
    fn verify(&self, password: &str, hash: &str) -> bool;
}
