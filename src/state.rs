use std::sync::Arc;

use crate::application::services::AccountService;
use crate::domain::repositories::AccountRepository;
use crate::utils::password::PasswordHasher;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<dyn AccountRepository>>,
}

impl AppState {
    pub fn new(repository: Arc<dyn AccountRepository>, hasher: PasswordHasher) -> Self {
        Self {
            account_service: Arc::new(AccountService::new(repository, hasher)),
        }
    }
}
