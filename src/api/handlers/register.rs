//! Handler for account registration.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::auth::{RegisterRequest, RegisterResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Request Body
///
/// ```json
/// { "name": "Alice", "email": "a@x.com", "password": "secret123" }
/// ```
///
/// # Response
///
/// ```json
/// { "error": null, "data": "6f1c0e0a-2b7d-4d55-9f0e-3c1f5f8a9b21" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with `{ "error": "<message>" }` when:
/// - the body is not valid JSON or fails validation (first violation reported)
/// - the email is already registered (`"Email already exists"`)
/// - the account could not be stored (generic message; details are logged)
pub async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, AppError> {
    let Json(payload) = payload?;

    let id = state.account_service.register(payload).await?;

    Ok(Json(RegisterResponse::created(id)))
}
