//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, RefreshTokenError, TokenError};

use ks_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Persistence error: {message}")]
    Persistence { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Refresh(#[from] RefreshTokenError),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl IntoErrorResponse for CoreError {
    fn to_error_response(&self) -> ErrorResponse {
        let code = match self {
            CoreError::Config { .. } => error_codes::CONFIG_ERROR,
            CoreError::Persistence { .. } | CoreError::Internal { .. } => {
                error_codes::INTERNAL_ERROR
            }
            CoreError::Auth(AuthError::AuthenticationFailed) => {
                error_codes::AUTHENTICATION_FAILED
            }
            CoreError::Token(TokenError::Malformed) => error_codes::TOKEN_MALFORMED,
            CoreError::Token(TokenError::InvalidSignature) => {
                error_codes::TOKEN_SIGNATURE_INVALID
            }
            CoreError::Token(TokenError::Expired) => error_codes::TOKEN_EXPIRED,
            CoreError::Token(TokenError::Revoked { .. }) => error_codes::TOKEN_REVOKED,
            CoreError::Refresh(RefreshTokenError::UnknownToken) => {
                error_codes::REFRESH_TOKEN_UNKNOWN
            }
            CoreError::Refresh(RefreshTokenError::InactiveToken) => {
                error_codes::REFRESH_TOKEN_INACTIVE
            }
        };

        let response = ErrorResponse::new(code, self.to_string());
        match self {
            CoreError::Token(TokenError::Revoked { user_email }) => {
                response.add_detail("user_email", user_email)
            }
            _ => response,
        }
    }
}
