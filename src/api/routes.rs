//! API route configuration.

use crate::api::handlers::{login_handler, register_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Public authentication routes.
///
/// # Endpoints
///
/// - `POST /register` - Create an account
/// - `POST /login`    - Placeholder, fixed response
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
}
