#![allow(dead_code)]

use async_trait::async_trait;
use auth_api::domain::entities::{Account, NewAccount};
use auth_api::domain::errors::StoreError;
use auth_api::domain::repositories::AccountRepository;
use auth_api::infrastructure::persistence::MemoryAccountRepository;
use auth_api::state::AppState;
use auth_api::utils::password::{DEFAULT_TIMEOUT, MIN_COST, PasswordHasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory store that counts reads and writes.
#[derive(Default)]
pub struct CountingRepository {
    pub inner: MemoryAccountRepository,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl CountingRepository {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountRepository for CountingRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_email(email).await
    }

    async fn create(&self, account: NewAccount) -> Result<Account, StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.create(account).await
    }
}

/// Store whose writes always fail with a backend error.
pub struct FailingRepository;

#[async_trait]
impl AccountRepository for FailingRepository {
    async fn find_by_email(&self, _email: &str) -> Result<Option<Account>, StoreError> {
        Ok(None)
    }

    async fn create(&self, _account: NewAccount) -> Result<Account, StoreError> {
        Err(StoreError::backend(
            "connection to server at db-internal-7 failed",
        ))
    }
}

pub fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(MIN_COST, DEFAULT_TIMEOUT)
}

pub fn create_test_state() -> (AppState, Arc<CountingRepository>) {
    let repo = Arc::new(CountingRepository::default());
    let state = AppState::new(repo.clone(), test_hasher());

    (state, repo)
}
