//! Configuration for the token codec

use ks_shared::config::JwtConfig;

/// Configuration for the token codec
#[derive(Debug, Clone)]
pub struct TokenCodecConfig {
    /// JWT signing secret, set once at process start
    pub jwt_secret: String,
    /// Access token lifetime in seconds
    pub access_token_expiry_seconds: i64,
    /// Issuer claim stamped into every token
    pub issuer: String,
}

impl Default for TokenCodecConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            access_token_expiry_seconds: 900,
            issuer: "knowledge-store".to_string(),
        }
    }
}

impl From<JwtConfig> for TokenCodecConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret,
            access_token_expiry_seconds: config.access_token_expiry,
            issuer: config.issuer,
        }
    }
}
