//! HTTP error envelope.
//!
//! Every failure leaves the service as `{"error": "<message>"}`. Internal
//! causes are logged and replaced with a generic message.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::errors::RegistrationError;

/// Message sent to clients in place of internal failure details.
pub const GENERIC_FAILURE_MESSAGE: &str = "Could not create account";

/// Message sent when the email is already registered.
pub const EMAIL_TAKEN_MESSAGE: &str = "Email already exists";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Client-correctable input problem; the message is shown verbatim.
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Conflict { message: String },

    /// Server-side fault; `details` are logged, never returned.
    #[error("{details}")]
    Internal { details: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::Internal {
            details: details.into(),
        }
    }

    /// Status code sent to the client.
    ///
    /// All kinds answer 400 to keep the public contract stable.
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Message sent to the client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation { message } | AppError::Conflict { message } => message.clone(),
            AppError::Internal { .. } => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<RegistrationError> for AppError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::InvalidInput(message) => AppError::bad_request(message),
            RegistrationError::EmailTaken => AppError::conflict(EMAIL_TAKEN_MESSAGE),
            RegistrationError::StoreFailure(e) => AppError::internal(e.to_string()),
            RegistrationError::HashFailure(e) => AppError::internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { details } = &self {
            tracing::error!(details = %details, "Request failed with internal error");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (self.status(), Json(body)).into_response()
    }
}
