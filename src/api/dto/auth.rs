//! DTOs for the registration and login endpoints.

use serde::Serialize;

use crate::domain::entities::AccountId;

/// Registration request body: `{ "name", "email", "password" }`.
pub use crate::application::validation::RegistrationInput as RegisterRequest;

/// Fixed message returned by the login placeholder.
pub const LOGIN_PLACEHOLDER_MESSAGE: &str = "Login ROUTE...";

/// Successful registration: `{ "error": null, "data": "<account id>" }`.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub error: Option<String>,
    pub data: AccountId,
}

impl RegisterResponse {
    pub fn created(id: AccountId) -> Self {
        Self {
            error: None,
            data: id,
        }
    }
}

/// Login placeholder body: `{ "msg": "Login ROUTE..." }`.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub msg: &'static str,
}

impl Default for LoginResponse {
    fn default() -> Self {
        Self {
            msg: LOGIN_PLACEHOLDER_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_response_shape() {
        let id = AccountId::new_random();
        let json = serde_json::to_value(RegisterResponse::created(id)).unwrap();

        assert_eq!(json, json!({ "error": null, "data": id.to_string() }));
    }

    #[test]
    fn test_login_response_shape() {
        let json = serde_json::to_value(LoginResponse::default()).unwrap();

        assert_eq!(json, json!({ "msg": "Login ROUTE..." }));
    }
}
