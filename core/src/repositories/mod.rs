//! Repository interfaces implemented by the excluded persistence layer.

pub mod refresh_token;

pub use refresh_token::{InMemoryRefreshTokenRepository, RefreshTokenRepository};
