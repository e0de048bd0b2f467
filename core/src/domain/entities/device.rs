//! Device identity supplied by clients at login, refresh, and logout.

use serde::{Deserialize, Serialize};

/// Kind of device a session belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Android,
    Ios,
    Web,
}

/// Caller-supplied device identity
///
/// Used only as the refresh-token rotation key; it is never authenticated
/// on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentity {
    /// External device identifier
    pub device_id: String,

    /// Kind of device
    pub device_type: DeviceType,

    /// Push notification token, if the device registered one
    #[serde(default)]
    pub notification_token: Option<String>,
}

impl DeviceIdentity {
    /// Creates a device identity without a notification token
    pub fn new(device_id: impl Into<String>, device_type: DeviceType) -> Self {
        Self {
            device_id: device_id.into(),
            device_type,
            notification_token: None,
        }
    }

    /// Attach a push notification token
    pub fn with_notification_token(mut self, token: impl Into<String>) -> Self {
        self.notification_token = Some(token.into());
        self
    }
}
