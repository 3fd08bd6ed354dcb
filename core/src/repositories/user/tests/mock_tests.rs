//! Tests for the mock user repository

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};
use crate::repositories::user::{MockUserRepository, UserRepository};

fn sample_user(email: &str, phone: &str) -> User {
    User::new("Test User".to_string(), email.to_string(), phone.to_string())
}

#[tokio::test]
async fn test_create_and_find_by_phone() {
    let repo = MockUserRepository::new();
    let user = sample_user("a@example.com", "+14085551234");

    let created = repo.create(user.clone()).await.unwrap();
    assert_eq!(created.id, user.id);

    let found = repo.find_by_phone("+14085551234").await.unwrap();
    assert_eq!(found.unwrap().email, "a@example.com");

    assert!(repo.find_by_phone("+14085550000").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_id() {
    let repo = MockUserRepository::new();
    let user = sample_user("a@example.com", "+14085551234");
    let id = user.id;

    repo.create(user).await.unwrap();
    assert!(repo.find_by_id(id).await.unwrap().is_some());
    assert!(repo.find_by_id(uuid::Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_contact_matches_either_field() {
    let repo = MockUserRepository::new();
    repo.create(sample_user("a@example.com", "+14085551234"))
        .await
        .unwrap();

    // email collides, phone does not
    let found = repo
        .find_by_contact("a@example.com", "+14085559999")
        .await
        .unwrap();
    assert!(found.is_some());

    // phone collides, email does not
    let found = repo
        .find_by_contact("other@example.com", "+14085551234")
        .await
        .unwrap();
    assert!(found.is_some());

    let found = repo
        .find_by_contact("other@example.com", "+14085559999")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_duplicate_create_is_rejected() {
    let repo = MockUserRepository::new();
    repo.create(sample_user("a@example.com", "+14085551234"))
        .await
        .unwrap();

    // same phone, different email
    let result = repo.create(sample_user("b@example.com", "+14085551234")).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));

    // same email, different phone
    let result = repo.create(sample_user("a@example.com", "+14085555678")).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));

    assert_eq!(repo.user_count().await, 1);
}

#[tokio::test]
async fn test_concurrent_duplicate_creates_produce_one_record() {
    let repo = Arc::new(MockUserRepository::new());

    let mut handles = Vec::new();
    for i in 0..8 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.create(sample_user(
                &format!("racer{}@example.com", i),
                "+14085551234",
            ))
            .await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(repo.user_count().await, 1);
}
