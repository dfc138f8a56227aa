//! Repository trait for account persistence.

use crate::domain::entities::{Account, NewAccount};
use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Repository interface for the account store.
///
/// Email uniqueness is enforced by the implementation itself: `create` must
/// return [`StoreError::DuplicateEmail`] when another account already holds the
/// email, even if a preceding `find_by_email` reported none.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAccountRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryAccountRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Finds an account by exact email match.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// Persists a new account and returns it with store-assigned fields.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateEmail`] if the email is already registered.
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn create(&self, account: NewAccount) -> Result<Account, StoreError>;
}
