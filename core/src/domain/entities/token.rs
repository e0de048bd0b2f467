//! Token entities for JWT-based authentication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for the access-token JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Authority names granted to the subject
    #[serde(default)]
    pub authorities: Vec<String>,

    /// Issued at timestamp (UTC epoch seconds)
    pub iat: i64,

    /// Expiration timestamp (UTC epoch seconds)
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `subject_id` - The user's numeric identifier
    /// * `authorities` - Authority names granted to the subject
    /// * `issued_at` - Issuance instant (becomes `iat`)
    /// * `expires_at` - Expiry instant (becomes `exp`)
    /// * `issuer` - Issuer claim value
    pub fn new(
        subject_id: i64,
        authorities: Vec<String>,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        issuer: impl Into<String>,
    ) -> Self {
        Self {
            sub: subject_id.to_string(),
            authorities,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            iss: issuer.into(),
        }
    }

    /// Gets the numeric subject identifier from the claims
    pub fn subject_id(&self) -> Result<i64, std::num::ParseIntError> {
        self.sub.parse()
    }

    /// Checks whether the claims are expired at the given instant
    ///
    /// A token is invalid from the exact expiry second onward.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// Refresh token record persisted per (user, device) pair
///
/// Records are deactivated on rotation or logout, never deleted, so the
/// full chain of rotations stays available as an audit trail. At most one
/// record per (user, device) is active at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the refresh token record
    pub id: Uuid,

    /// Hashed secret value; the raw secret is never stored
    pub token_hash: String,

    /// User this token belongs to
    pub user_id: i64,

    /// Device this token was issued for
    pub device_id: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Whether this record is the active one for its (user, device) pair
    pub is_active: bool,
}

impl RefreshToken {
    /// Creates a new active refresh token record
    pub fn new(
        user_id: i64,
        device_id: impl Into<String>,
        token_hash: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            token_hash: token_hash.into(),
            user_id,
            device_id: device_id.into(),
            created_at,
            is_active: true,
        }
    }

    /// Marks the record inactive
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

/// A freshly issued refresh credential
///
/// Pairs the persisted record with the raw secret, which leaves the store
/// exactly once and is never written to storage.
#[derive(Debug, Clone)]
pub struct IssuedRefreshToken {
    /// The opaque secret handed to the client
    pub secret: String,

    /// The persisted record (hash only)
    pub token: RefreshToken,
}
