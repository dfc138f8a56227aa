//! In-process account repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{Account, AccountId, NewAccount};
use crate::domain::errors::StoreError;
use crate::domain::repositories::AccountRepository;

/// Account store backed by a concurrent map keyed by email.
///
/// Used when no database is configured and in tests. Data lives only as long
/// as the process. Insertion is an atomic insert-if-absent on the email key.
#[derive(Default)]
pub struct MemoryAccountRepository {
    accounts: DashMap<String, Account>,
}

impl MemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.get(email).map(|entry| entry.value().clone()))
    }

    async fn create(&self, account: NewAccount) -> Result<Account, StoreError> {
        match self.accounts.entry(account.email.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateEmail),
            Entry::Vacant(slot) => {
                let account = account.into_account(AccountId::new_random(), Utc::now());
                slot.insert(account.clone());
                Ok(account)
            }
        }
    }
}
