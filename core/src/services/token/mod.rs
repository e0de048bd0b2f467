//! Token service module for access-token handling
//!
//! This module covers:
//! - JWT access token issuance and decoding (the codec)
//! - Claimed-expiry extraction for the logged-out token cache
//! - The validation pipeline every authenticated request passes through

mod codec;
mod config;
mod validator;


pub use codec::{TokenCodec, TokenExpirySource};
pub use config::TokenCodecConfig;
pub use validator::TokenValidator;
