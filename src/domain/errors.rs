//! Error taxonomy of the account domain.

use thiserror::Error;

/// Boxed underlying cause from a storage backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure reported by an [`AccountRepository`](super::repositories::AccountRepository).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store rejected the write because the email is already registered.
    #[error("email already exists")]
    DuplicateEmail,

    #[error("storage backend error: {0}")]
    Backend(#[source] BoxError),
}

impl StoreError {
    pub fn backend(cause: impl Into<BoxError>) -> Self {
        Self::Backend(cause.into())
    }
}

/// Submitted registration fields violate the input policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

/// Password hashing or verification did not complete.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("password hashing timed out")]
    Timeout,
}

/// Outcome of a failed registration.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Email already exists")]
    EmailTaken,

    #[error("store failure: {0}")]
    StoreFailure(#[source] StoreError),

    #[error("hash failure: {0}")]
    HashFailure(#[source] HashError),
}

impl From<ValidationError> for RegistrationError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidInput(err.message)
    }
}

impl From<StoreError> for RegistrationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::EmailTaken,
            other => Self::StoreFailure(other),
        }
    }
}

impl From<HashError> for RegistrationError {
    fn from(err: HashError) -> Self {
        Self::HashFailure(err)
    }
}

/// Outcome of a failed credential check.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    /// Unknown email or wrong password; both are reported the same way.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("store failure: {0}")]
    StoreFailure(#[from] StoreError),

    #[error("hash failure: {0}")]
    HashFailure(#[from] HashError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_email_maps_to_email_taken() {
        let err: RegistrationError = StoreError::DuplicateEmail.into();
        assert!(matches!(err, RegistrationError::EmailTaken));
    }

    #[test]
    fn test_backend_error_maps_to_store_failure() {
        let err: RegistrationError = StoreError::backend("connection reset").into();
        assert!(matches!(
            err,
            RegistrationError::StoreFailure(StoreError::Backend(_))
        ));
    }

    #[test]
    fn test_validation_error_keeps_message() {
        let err: RegistrationError = ValidationError {
            field: "email",
            message: "Invalid email format".to_string(),
        }
        .into();

        assert_eq!(err.to_string(), "Invalid email format");
    }
}
