//! Handler for the login endpoint.

use axum::{Json, http::StatusCode};

use crate::api::dto::auth::LoginResponse;

/// Login placeholder.
///
/// # Endpoint
///
/// `POST /login`
///
/// Ignores the request body and performs no credential check. Always answers
/// 200 with `{ "msg": "Login ROUTE..." }`.
pub async fn login_handler() -> (StatusCode, Json<LoginResponse>) {
    (StatusCode::OK, Json(LoginResponse::default()))
}
