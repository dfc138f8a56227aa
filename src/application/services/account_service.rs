//! Account registration and credential verification.

use std::sync::Arc;

use crate::application::validation::{RegistrationInput, validate};
use crate::domain::entities::{Account, AccountId, NewAccount};
use crate::domain::errors::{AuthenticationError, RegistrationError, StoreError};
use crate::domain::repositories::AccountRepository;
use crate::utils::password::PasswordHasher;

/// Service orchestrating the account store and the password hasher.
///
/// Generic over the repository so handlers can run against a trait object
/// while unit tests use the generated mock.
pub struct AccountService<R: AccountRepository + ?Sized> {
    repository: Arc<R>,
    hasher: PasswordHasher,
}

impl<R: AccountRepository + ?Sized> AccountService<R> {
    pub fn new(repository: Arc<R>, hasher: PasswordHasher) -> Self {
        Self { repository, hasher }
    }

    /// Registers a new account and returns its identifier.
    ///
    /// Performs one read and, absent a conflict, one write. Nothing is written
    /// when validation fails or the email is already registered. A uniqueness
    /// violation reported by the store on write is also mapped to
    /// [`RegistrationError::EmailTaken`].
    ///
    /// # Errors
    ///
    /// - [`RegistrationError::InvalidInput`] if the input fails validation
    /// - [`RegistrationError::EmailTaken`] if the email is already registered
    /// - [`RegistrationError::HashFailure`] if hashing fails or times out
    /// - [`RegistrationError::StoreFailure`] on storage errors
    pub async fn register(&self, input: RegistrationInput) -> Result<AccountId, RegistrationError> {
        let input = validate(input).inspect_err(|e| {
            tracing::debug!(field = e.field, "Registration input rejected");
            metrics::counter!("registration_rejected_total", "reason" => "invalid_input")
                .increment(1);
        })?;

        if self.repository.find_by_email(&input.email).await?.is_some() {
            metrics::counter!("registration_rejected_total", "reason" => "email_taken")
                .increment(1);
            return Err(RegistrationError::EmailTaken);
        }

        let password_hash = self.hasher.hash(input.password).await?;

        let account = self
            .repository
            .create(NewAccount {
                name: input.name,
                email: input.email,
                password_hash,
            })
            .await
            .inspect_err(|e| {
                if matches!(e, StoreError::DuplicateEmail) {
                    metrics::counter!("registration_rejected_total", "reason" => "email_taken")
                        .increment(1);
                }
            })?;

        metrics::counter!("accounts_registered_total").increment(1);
        tracing::info!(account_id = %account.id, "Account registered");

        Ok(account.id)
    }

    /// Verifies a password against the stored digest for `email`.
    ///
    /// Not wired to the HTTP login route, which remains a fixed stub.
    ///
    /// # Errors
    ///
    /// - [`AuthenticationError::InvalidCredentials`] if the email is unknown or
    ///   the password does not match
    /// - [`AuthenticationError::StoreFailure`] on storage errors
    /// - [`AuthenticationError::HashFailure`] if the stored digest cannot be checked
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Account, AuthenticationError> {
        let Some(account) = self.repository.find_by_email(email).await? else {
            metrics::counter!("authentication_failed_total").increment(1);
            return Err(AuthenticationError::InvalidCredentials);
        };

        let matches = self
            .hasher
            .verify(password.to_string(), account.password_hash.clone())
            .await?;

        if !matches {
            metrics::counter!("authentication_failed_total").increment(1);
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(account)
    }

    /// Looks up an account by exact email.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on storage errors.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        self.repository.find_by_email(email).await
    }
}
