//! Salted password hashing with bcrypt.
//!
//! bcrypt is CPU-bound, so hashing and verification run on the blocking thread
//! pool and are bounded by a timeout. Input bcrypt would truncate is refused
//! instead of hashed.

use std::time::Duration;
use tokio::time::timeout;

use crate::domain::errors::HashError;

/// Work factor used when none is configured.
pub const DEFAULT_COST: u32 = 10;

/// Lowest and highest work factors accepted by bcrypt.
pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

/// Default upper bound for a single hash or verify call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Hashes and verifies passwords at a fixed bcrypt cost.
///
/// Every call to [`PasswordHasher::hash`] generates a fresh random salt, so
/// hashing the same password twice yields different digests.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    timeout: Duration,
}

impl PasswordHasher {
    pub fn new(cost: u32, timeout: Duration) -> Self {
        Self { cost, timeout }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Derives a salted digest from `password`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if bcrypt rejects the input (including a password
    /// too long to hash without truncation), the blocking task panics, or the
    /// timeout elapses.
    pub async fn hash(&self, password: String) -> Result<String, HashError> {
        let cost = self.cost;
        let task =
            tokio::task::spawn_blocking(move || bcrypt::non_truncating_hash(password, cost));

        match timeout(self.timeout, task).await {
            Ok(joined) => Ok(joined??),
            Err(_) => Err(HashError::Timeout),
        }
    }

    /// Checks `password` against a digest produced by [`PasswordHasher::hash`].
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the digest is malformed, the blocking task
    /// panics, or the timeout elapses. A wrong password is `Ok(false)`, and so
    /// is one too long to have been hashed.
    pub async fn verify(&self, password: String, hashed: String) -> Result<bool, HashError> {
        let task = tokio::task::spawn_blocking(move || {
            match bcrypt::non_truncating_verify(password, &hashed) {
                Err(bcrypt::BcryptError::Truncation(_)) => Ok(false),
                other => other,
            }
        });

        match timeout(self.timeout, task).await {
            Ok(joined) => Ok(joined??),
            Err(_) => Err(HashError::Timeout),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST, DEFAULT_TIMEOUT)
    }
}
