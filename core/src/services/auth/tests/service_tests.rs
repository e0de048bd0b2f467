//! End-to-end tests of the login/refresh/logout lifecycle

use std::sync::Arc;

use crate::cache::RevocationCache;
use crate::domain::clock::{Clock, ManualClock};
use crate::domain::entities::device::{DeviceIdentity, DeviceType};
use crate::domain::entities::principal::Principal;
use crate::errors::{AuthError, CoreError, RefreshTokenError, TokenError};
use crate::repositories::refresh_token::InMemoryRefreshTokenRepository;
use crate::services::auth::AuthSessionService;
use crate::services::refresh::RefreshTokenStore;
use crate::services::token::{TokenCodec, TokenCodecConfig, TokenValidator};

use super::mocks::StubCredentialVerifier;

struct Fixture {
    service: AuthSessionService<
        StubCredentialVerifier,
        InMemoryRefreshTokenRepository,
        RevocationCache<TokenCodec>,
    >,
    validator: TokenValidator<RevocationCache<TokenCodec>>,
    clock: Arc<ManualClock>,
}

fn fixture() -> Fixture {
    let clock = Arc::new(ManualClock::at(1_700_000_000));

    let codec = Arc::new(
        TokenCodec::new(TokenCodecConfig::default(), clock.clone() as Arc<dyn Clock>).unwrap(),
    );
    let repository = Arc::new(InMemoryRefreshTokenRepository::new());
    let refresh_store = Arc::new(RefreshTokenStore::new(
        repository,
        clock.clone() as Arc<dyn Clock>,
    ));
    let revocation = Arc::new(RevocationCache::new(
        100,
        codec.clone(),
        clock.clone() as Arc<dyn Clock>,
    ));
    let verifier = Arc::new(StubCredentialVerifier::accepting(
        "alice@example.com",
        "correct horse",
        Principal::new(42, "alice@example.com", vec!["ROLE_USER".to_string()]),
    ));

    Fixture {
        service: AuthSessionService::new(
            verifier,
            codec.clone(),
            refresh_store,
            revocation.clone(),
            clock.clone() as Arc<dyn Clock>,
        ),
        validator: TokenValidator::new(codec, revocation, clock.clone() as Arc<dyn Clock>),
        clock,
    }
}

fn device() -> DeviceIdentity {
    DeviceIdentity::new("D1", DeviceType::Web)
}

#[tokio::test]
async fn login_issues_a_usable_token_pair() {
    let f = fixture();

    let tokens = f
        .service
        .login("alice@example.com", "correct horse", &device())
        .await
        .unwrap();

    assert_eq!(tokens.token_type, "Bearer");
    assert_eq!(tokens.expires_in, 900);

    let principal = f.validator.validate(&tokens.access_token).unwrap();
    assert_eq!(principal.user_id, 42);
    assert_eq!(principal.authorities, vec!["ROLE_USER".to_string()]);
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let f = fixture();

    let result = f
        .service
        .login("alice@example.com", "wrong", &device())
        .await;

    assert!(matches!(
        result,
        Err(CoreError::Auth(AuthError::AuthenticationFailed))
    ));
}

#[tokio::test]
async fn refresh_rotates_the_credential_and_issues_a_new_access_token() {
    let f = fixture();
    let tokens = f
        .service
        .login("alice@example.com", "correct horse", &device())
        .await
        .unwrap();

    let refreshed = f.service.refresh(&tokens.refresh_token).await.unwrap();

    assert_ne!(refreshed.refresh_token, tokens.refresh_token);
    let principal = f.validator.validate(&refreshed.access_token).unwrap();
    assert_eq!(principal.user_id, 42);
    // The refreshed token proves only the subject
    assert!(principal.authorities.is_empty());

    // The spent secret no longer rotates
    assert!(matches!(
        f.service.refresh(&tokens.refresh_token).await,
        Err(CoreError::Refresh(RefreshTokenError::InactiveToken))
    ));
}

#[tokio::test]
async fn refresh_rejects_an_unknown_secret() {
    let f = fixture();

    assert!(matches!(
        f.service.refresh("never-issued").await,
        Err(CoreError::Refresh(RefreshTokenError::UnknownToken))
    ));
}

#[tokio::test]
async fn logout_revokes_both_credentials() {
    let f = fixture();
    let tokens = f
        .service
        .login("alice@example.com", "correct horse", &device())
        .await
        .unwrap();

    f.service
        .logout(&tokens.access_token, "alice@example.com", &device())
        .await
        .unwrap();

    match f.validator.validate(&tokens.access_token) {
        Err(CoreError::Token(TokenError::Revoked { user_email })) => {
            assert_eq!(user_email, "alice@example.com");
        }
        other => panic!("expected a revoked-token error, got {other:?}"),
    }
    assert!(matches!(
        f.service.refresh(&tokens.refresh_token).await,
        Err(CoreError::Refresh(RefreshTokenError::InactiveToken))
    ));
}

#[tokio::test]
async fn logout_twice_is_not_an_error() {
    let f = fixture();
    let tokens = f
        .service
        .login("alice@example.com", "correct horse", &device())
        .await
        .unwrap();

    f.service
        .logout(&tokens.access_token, "alice@example.com", &device())
        .await
        .unwrap();
    f.service
        .logout(&tokens.access_token, "alice@example.com", &device())
        .await
        .unwrap();
}

#[tokio::test]
async fn a_new_login_starts_a_fresh_session_after_logout() {
    let f = fixture();
    let first = f
        .service
        .login("alice@example.com", "correct horse", &device())
        .await
        .unwrap();
    f.service
        .logout(&first.access_token, "alice@example.com", &device())
        .await
        .unwrap();

    // Distinct issuance instant keeps the new token out of the revocation
    // cache entry recorded for the old one.
    f.clock.advance(1);
    let second = f
        .service
        .login("alice@example.com", "correct horse", &device())
        .await
        .unwrap();

    assert!(f.validator.validate(&second.access_token).is_ok());
    assert!(f.service.refresh(&second.refresh_token).await.is_ok());
}
