//! Domain-specific error types for authentication and token operations
//!
//! Every failure path in the credential core is a named variant here. The
//! variants are deliberately non-overlapping so the presentation layer can
//! map each one to the right transport response and client-retry behavior.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The upstream credential check rejected the identifier/secret pair
    #[error("Authentication failed")]
    AuthenticationFailed,
}

/// Access-token errors, in validation-pipeline order
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// The token string could not be parsed as a JWT
    #[error("Malformed token")]
    Malformed,

    /// The token parsed but its signature does not verify against the
    /// configured key
    #[error("Incorrect signature")]
    InvalidSignature,

    /// The token's `exp` claim is at or before the current instant
    #[error("Token expired")]
    Expired,

    /// The token was presented after its owner logged out
    #[error("Token corresponds to an already logged out user [{user_email}]")]
    Revoked { user_email: String },
}

/// Refresh-token errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RefreshTokenError {
    /// No record matches the presented secret
    #[error("Unknown refresh token")]
    UnknownToken,

    /// The matched record was already rotated or revoked; this is the
    /// replay-detection path
    #[error("Refresh token is no longer active for its device")]
    InactiveToken,
}
