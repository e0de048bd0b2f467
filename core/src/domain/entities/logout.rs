//! Logout record kept while a revoked access token could still pass expiry
//! checking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::device::DeviceIdentity;

/// Record of a successful logout for one access-token string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutRecord {
    /// The exact access-token string that was logged out
    pub token: String,

    /// Email of the subject who logged out, for diagnostics
    pub user_email: String,

    /// When the logout happened
    pub logged_out_at: DateTime<Utc>,

    /// Device the logout request came from, when the caller supplied one
    #[serde(default)]
    pub device: Option<DeviceIdentity>,
}

impl LogoutRecord {
    pub fn new(
        token: impl Into<String>,
        user_email: impl Into<String>,
        logged_out_at: DateTime<Utc>,
        device: Option<DeviceIdentity>,
    ) -> Self {
        Self {
            token: token.into(),
            user_email: user_email.into(),
            logged_out_at,
            device,
        }
    }
}
