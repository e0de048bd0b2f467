//! Business services containing domain logic and use cases.

pub mod auth;
pub mod refresh;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthSessionService, CredentialVerifier};
pub use refresh::RefreshTokenStore;
pub use token::{TokenCodec, TokenCodecConfig, TokenExpirySource, TokenValidator};
