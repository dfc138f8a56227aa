//! HTTP request handlers for API endpoints.

pub mod login;
pub mod register;

pub use login::login_handler;
pub use register::register_handler;
