//! Tests for the in-memory account repository

use crate::domain::entities::account::{Account, GoogleIdentity};
use crate::errors::DomainError;
use crate::repositories::account::{AccountRepository, MockAccountRepository};

#[tokio::test]
async fn test_create_and_find_by_email() {
    let repo = MockAccountRepository::new();
    let account = Account::new_local("jane@example.com", Some("hash".to_string()));

    let created = repo.create(account).await.unwrap();

    let found = repo.find_by_email("jane@example.com").await.unwrap();
    assert_eq!(found.map(|a| a.id), Some(created.id));
}

#[tokio::test]
async fn test_find_by_email_checks_google_identity() {
    let repo = MockAccountRepository::new();
    let mut account = Account::new_local("jane@example.com", None);
    account.google = Some(GoogleIdentity {
        email: "jane.work@gmail.com".to_string(),
        provider_id: "g-123".to_string(),
    });
    let id = repo.seed(account).await;

    let found = repo.find_by_email("Jane.Work@Gmail.com").await.unwrap();
    assert_eq!(found.map(|a| a.id), Some(id));
}

#[tokio::test]
async fn test_find_by_email_unknown() {
    let repo = MockAccountRepository::new();
    let found = repo.find_by_email("nobody@example.com").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_create_rejects_duplicate_email() {
    let repo = MockAccountRepository::new();
    repo.create(Account::new_local("jane@example.com", None))
        .await
        .unwrap();

    let result = repo
        .create(Account::new_google("jane@example.com", "g-456"))
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_update_unknown_account_fails() {
    let repo = MockAccountRepository::new();
    let account = Account::new_local("jane@example.com", None);

    let result = repo.update(account).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_update_persists_mutations() {
    let repo = MockAccountRepository::new();
    let account = Account::new_local("jane@example.com", None);
    let id = repo.seed(account).await;

    let mut account = repo.find_by_id(id).await.unwrap().unwrap();
    account.verify();
    repo.update(account).await.unwrap();

    let stored = repo.find_by_id(id).await.unwrap().unwrap();
    assert!(stored.is_verified);
}

#[tokio::test]
async fn test_exists_by_email() {
    let repo = MockAccountRepository::new();
    repo.seed(Account::new_local("jane@example.com", None)).await;

    assert!(repo.exists_by_email("jane@example.com").await.unwrap());
    assert!(!repo.exists_by_email("other@example.com").await.unwrap());
}
