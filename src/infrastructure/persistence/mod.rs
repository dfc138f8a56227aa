//! Account repository implementations.
//!
//! - [`PgAccountRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryAccountRepository`] - In-process map, used without a database

pub mod memory_account_repository;
pub mod pg_account_repository;

pub use memory_account_repository::MemoryAccountRepository;
pub use pg_account_repository::PgAccountRepository;
