//! Unit tests for the core error taxonomy

use ks_shared::errors::{error_codes, IntoErrorResponse};

use crate::errors::{AuthError, CoreError, RefreshTokenError, TokenError};

#[test]
fn token_errors_map_to_distinct_codes() {
    let cases = [
        (CoreError::Token(TokenError::Malformed), error_codes::TOKEN_MALFORMED),
        (
            CoreError::Token(TokenError::InvalidSignature),
            error_codes::TOKEN_SIGNATURE_INVALID,
        ),
        (CoreError::Token(TokenError::Expired), error_codes::TOKEN_EXPIRED),
        (
            CoreError::Token(TokenError::Revoked {
                user_email: "user@example.com".to_string(),
            }),
            error_codes::TOKEN_REVOKED,
        ),
        (
            CoreError::Refresh(RefreshTokenError::UnknownToken),
            error_codes::REFRESH_TOKEN_UNKNOWN,
        ),
        (
            CoreError::Refresh(RefreshTokenError::InactiveToken),
            error_codes::REFRESH_TOKEN_INACTIVE,
        ),
        (
            CoreError::Auth(AuthError::AuthenticationFailed),
            error_codes::AUTHENTICATION_FAILED,
        ),
    ];

    for (error, expected_code) in cases {
        assert_eq!(error.to_error_response().error, expected_code);
    }
}

#[test]
fn revoked_response_carries_the_subject_email() {
    let error = CoreError::Token(TokenError::Revoked {
        user_email: "user@example.com".to_string(),
    });

    let response = error.to_error_response();
    let details = response.details.expect("revoked carries details");
    assert_eq!(details["user_email"], "user@example.com");
    assert!(response.message.contains("user@example.com"));
}

#[test]
fn specific_errors_convert_into_core_error() {
    let error: CoreError = TokenError::Expired.into();
    assert!(matches!(error, CoreError::Token(TokenError::Expired)));

    let error: CoreError = RefreshTokenError::UnknownToken.into();
    assert!(matches!(
        error,
        CoreError::Refresh(RefreshTokenError::UnknownToken)
    ));
}
