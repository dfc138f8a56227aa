use crate::domain::errors::StoreError;

/// Unique constraint guarding `accounts.email`.
pub const ACCOUNTS_EMAIL_CONSTRAINT: &str = "accounts_email_key";

pub fn is_unique_violation_on_email(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(ACCOUNTS_EMAIL_CONSTRAINT))
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_email(&e) {
            return StoreError::DuplicateEmail;
        }

        StoreError::backend(e)
    }
}
