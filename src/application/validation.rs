//! Input policy for registration.
//!
//! Validation is a pure function over the submitted fields. Fields are checked
//! in the fixed order `name`, `email`, `password`; the first message of the
//! first failing field is reported.

use serde::Deserialize;
use std::fmt;
use validator::Validate;

use crate::domain::errors::ValidationError;

pub const NAME_MIN_LEN: u64 = 1;
pub const NAME_MAX_LEN: u64 = 255;
pub const PASSWORD_MIN_LEN: u64 = 6;

/// bcrypt reads at most 72 bytes including a trailing NUL, so anything longer
/// than this would be silently cut short.
pub const PASSWORD_MAX_BYTES: usize = 71;

pub const PASSWORD_TOO_LONG_MESSAGE: &str = "Password must be at most 71 bytes";

const FIELD_ORDER: [&str; 3] = ["name", "email", "password"];

/// Registration fields as submitted by the client.
///
/// Missing fields deserialize as empty strings so they are reported by the
/// validator rather than by the JSON extractor.
#[derive(Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegistrationInput {
    #[validate(length(
        min = NAME_MIN_LEN,
        max = NAME_MAX_LEN,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    // The email check also rejects addresses longer than 254 characters.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(
        length(min = PASSWORD_MIN_LEN, message = "Password must be at least 6 characters"),
        custom(function = password_fits_bcrypt)
    )]
    pub password: String,
}

fn password_fits_bcrypt(password: &str) -> Result<(), validator::ValidationError> {
    if password.len() > PASSWORD_MAX_BYTES {
        return Err(validator::ValidationError::new("password_too_long")
            .with_message(PASSWORD_TOO_LONG_MESSAGE.into()));
    }
    Ok(())
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Registration fields that passed [`validate`].
pub struct ValidatedInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for ValidatedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Checks the submitted fields against the input policy. Performs no I/O.
///
/// # Errors
///
/// Returns [`ValidationError`] describing the first violation.
pub fn validate(input: RegistrationInput) -> Result<ValidatedInput, ValidationError> {
    if let Err(errors) = input.validate() {
        let field_errors = errors.field_errors();

        for field in FIELD_ORDER {
            if let Some(first) = field_errors.get(field).and_then(|errs| errs.first()) {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {field}"));
                return Err(ValidationError { field, message });
            }
        }

        return Err(ValidationError {
            field: "input",
            message: "Invalid input".to_string(),
        });
    }

    Ok(ValidatedInput {
        name: input.name,
        email: input.email,
        password: input.password,
    })
}
