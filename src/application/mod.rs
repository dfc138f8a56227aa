//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`validation`] - Pure input policy for registration
//! - [`services::account_service::AccountService`] - Registration and credential checks

pub mod services;
pub mod validation;
