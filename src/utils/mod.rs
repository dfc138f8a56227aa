//! Helpers shared across layers.
//!
//! - [`password`] - bcrypt hashing off the async executor
//! - [`db_error`] - Mapping of SQLx errors into store errors

pub mod db_error;
pub mod password;
