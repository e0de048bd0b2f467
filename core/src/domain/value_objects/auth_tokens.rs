//! Authentication token pair returned to the client after login or refresh.

use serde::{Deserialize, Serialize};

/// Access and refresh credentials returned by the session facade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    /// Signed JWT access token
    pub access_token: String,

    /// Opaque refresh-token secret for this device
    pub refresh_token: String,

    /// Token scheme expected in the Authorization header
    pub token_type: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,
}

impl AuthTokens {
    /// Creates a bearer token pair
    pub fn bearer(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_in: i64,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            token_type: String::from("Bearer"),
            expires_in,
        }
    }
}
