//! Domain layer containing the account model and its contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`errors`] - Error taxonomy shared by services and adapters
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod errors;
pub mod repositories;
