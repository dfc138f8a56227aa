//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewAccount`] carries the caller-supplied fields, [`Account`] the persisted
//! record including store-assigned ones.

pub mod account;

pub use account::{Account, AccountId, NewAccount};
