//! Unit tests for the refresh token store

use std::sync::Arc;

use crate::domain::clock::{Clock, ManualClock};
use crate::domain::entities::device::{DeviceIdentity, DeviceType};
use crate::errors::{CoreError, RefreshTokenError};
use crate::repositories::refresh_token::{
    InMemoryRefreshTokenRepository, RefreshTokenRepository,
};
use crate::services::refresh::RefreshTokenStore;

fn store() -> (
    RefreshTokenStore<InMemoryRefreshTokenRepository>,
    Arc<InMemoryRefreshTokenRepository>,
) {
    let repository = Arc::new(InMemoryRefreshTokenRepository::new());
    let clock = Arc::new(ManualClock::at(1_000));
    (
        RefreshTokenStore::new(repository.clone(), clock as Arc<dyn Clock>),
        repository,
    )
}

fn device(id: &str) -> DeviceIdentity {
    DeviceIdentity::new(id, DeviceType::Android)
}

#[tokio::test]
async fn issue_creates_an_active_record() {
    let (store, repository) = store();

    let issued = store.issue(42, &device("D1")).await.unwrap();

    assert_eq!(issued.token.user_id, 42);
    assert_eq!(issued.token.device_id, "D1");
    assert!(issued.token.is_active);
    assert_eq!(issued.secret.len(), 32);
    // Only the hash is persisted
    assert_ne!(issued.token.token_hash, issued.secret);
    assert!(repository
        .find_by_token_hash(&issued.token.token_hash)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn issue_replaces_the_previous_active_record() {
    let (store, repository) = store();

    let first = store.issue(42, &device("D1")).await.unwrap();
    let second = store.issue(42, &device("D1")).await.unwrap();

    let active = repository
        .find_active_by_user_and_device(42, "D1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(active.id, second.token.id);

    let old = repository
        .find_by_token_hash(&first.token.token_hash)
        .await
        .unwrap()
        .unwrap();
    assert!(!old.is_active);
}

#[tokio::test]
async fn devices_keep_independent_refresh_tokens() {
    let (store, repository) = store();

    store.issue(42, &device("D1")).await.unwrap();
    store.issue(42, &device("D2")).await.unwrap();

    assert!(repository
        .find_active_by_user_and_device(42, "D1")
        .await
        .unwrap()
        .is_some());
    assert!(repository
        .find_active_by_user_and_device(42, "D2")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn rotate_deactivates_the_old_record_and_issues_a_new_one() {
    let (store, repository) = store();
    let issued = store.issue(42, &device("D1")).await.unwrap();

    let rotated = store.rotate(&issued.secret).await.unwrap();

    assert_eq!(rotated.token.user_id, 42);
    assert_eq!(rotated.token.device_id, "D1");
    assert_ne!(rotated.secret, issued.secret);

    // Old record survives, inactive, for the audit trail
    let old = repository
        .find_by_token_hash(&issued.token.token_hash)
        .await
        .unwrap()
        .unwrap();
    assert!(!old.is_active);

    // The rotated secret works exactly once
    assert!(matches!(
        store.rotate(&issued.secret).await,
        Err(CoreError::Refresh(RefreshTokenError::InactiveToken))
    ));
    assert!(store.rotate(&rotated.secret).await.is_ok());
}

#[tokio::test]
async fn rotate_rejects_an_unknown_secret() {
    let (store, _) = store();

    assert!(matches!(
        store.rotate("no-such-secret").await,
        Err(CoreError::Refresh(RefreshTokenError::UnknownToken))
    ));
}

#[tokio::test]
async fn concurrent_rotation_of_one_secret_has_one_winner() {
    let repository = Arc::new(InMemoryRefreshTokenRepository::new());
    let clock = Arc::new(ManualClock::at(1_000));
    let store = Arc::new(RefreshTokenStore::new(
        repository.clone(),
        clock as Arc<dyn Clock>,
    ));

    let issued = store.issue(42, &device("D1")).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = store.clone();
        let secret = issued.secret.clone();
        handles.push(tokio::spawn(async move { store.rotate(&secret).await }));
    }

    let mut winners = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => winners += 1,
            Err(CoreError::Refresh(RefreshTokenError::InactiveToken)) => {}
            Err(other) => panic!("unexpected rotation error: {other:?}"),
        }
    }
    assert_eq!(winners, 1);
}

#[tokio::test]
async fn revoke_deactivates_the_active_record() {
    let (store, repository) = store();
    let issued = store.issue(42, &device("D1")).await.unwrap();

    store.revoke(42, "D1").await.unwrap();

    assert!(repository
        .find_active_by_user_and_device(42, "D1")
        .await
        .unwrap()
        .is_none());
    assert!(matches!(
        store.rotate(&issued.secret).await,
        Err(CoreError::Refresh(RefreshTokenError::InactiveToken))
    ));
}

#[tokio::test]
async fn revoke_is_idempotent() {
    let (store, _) = store();
    store.issue(42, &device("D1")).await.unwrap();

    store.revoke(42, "D1").await.unwrap();
    store.revoke(42, "D1").await.unwrap();
    // Revoking a pair that never had a token is fine too
    store.revoke(7, "D9").await.unwrap();
}
