//! Principal types produced by credential verification and token validation.

use serde::{Deserialize, Serialize};

/// Authenticated user as reported by the external credential check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Numeric user identifier
    pub id: i64,

    /// User email, carried into logout diagnostics
    pub email: String,

    /// Authority names granted to the user
    pub authorities: Vec<String>,
}

impl Principal {
    pub fn new(id: i64, email: impl Into<String>, authorities: Vec<String>) -> Self {
        Self {
            id,
            email: email.into(),
            authorities,
        }
    }
}

/// Outcome of validating an access token
///
/// Carries only what the token itself proves: the subject and its
/// authority set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedPrincipal {
    /// Numeric user identifier from the `sub` claim
    pub user_id: i64,

    /// Authority names from the token
    pub authorities: Vec<String>,
}
