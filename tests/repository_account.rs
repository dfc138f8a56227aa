//! PostgreSQL repository tests. Require a reachable `DATABASE_URL`:
//!
//! ```bash
//! cargo test --test repository_account -- --ignored
//! ```

use auth_api::domain::entities::NewAccount;
use auth_api::domain::errors::StoreError;
use auth_api::domain::repositories::AccountRepository;
use auth_api::infrastructure::persistence::PgAccountRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_account(email: &str) -> NewAccount {
    NewAccount {
        name: "Alice".to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$abcdefghijklmnopqrstuuVJ0Z8iF3bOQz4mHk5l5p3z3ZtA5o6yC".to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_account(pool: PgPool) {
    let repo = PgAccountRepository::new(Arc::new(pool));

    let account = repo.create(new_account("a@x.com")).await.unwrap();

    assert_eq!(account.name, "Alice");
    assert_eq!(account.email, "a@x.com");
    assert!(!account.id.to_string().is_empty());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_email(pool: PgPool) {
    let repo = PgAccountRepository::new(Arc::new(pool));

    let created = repo.create(new_account("a@x.com")).await.unwrap();
    let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash, created.password_hash);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_email_missing(pool: PgPool) {
    let repo = PgAccountRepository::new(Arc::new(pool));

    assert!(repo.find_by_email("nobody@x.com").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_email_match_is_exact(pool: PgPool) {
    let repo = PgAccountRepository::new(Arc::new(pool));

    repo.create(new_account("a@x.com")).await.unwrap();

    assert!(repo.find_by_email("A@X.COM").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_email_maps_to_duplicate(pool: PgPool) {
    let repo = PgAccountRepository::new(Arc::new(pool));

    repo.create(new_account("a@x.com")).await.unwrap();
    let result = repo.create(new_account("a@x.com")).await;

    assert!(matches!(result, Err(StoreError::DuplicateEmail)));
}
