//! # Knowledge Store Core
//!
//! Credential lifecycle core for the Knowledge Store backend.
//! This crate contains the access-token codec, the logged-out token cache,
//! per-device refresh-token rotation, the validation pipeline, and the
//! authentication session facade, together with the repository interfaces
//! the excluded persistence layer implements.

pub mod cache;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use cache::{RevocationCache, RevocationStore};
pub use domain::{
    AuthTokens, AuthenticatedPrincipal, Claims, Clock, DeviceIdentity, DeviceType,
    IssuedRefreshToken, LogoutRecord, ManualClock, Principal, RefreshToken, SystemClock,
};
pub use errors::{AuthError, CoreError, CoreResult, RefreshTokenError, TokenError};
pub use repositories::{InMemoryRefreshTokenRepository, RefreshTokenRepository};
pub use services::{
    AuthSessionService, CredentialVerifier, RefreshTokenStore, TokenCodec, TokenCodecConfig,
    TokenExpirySource, TokenValidator,
};
