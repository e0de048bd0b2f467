//! Refresh token store module
//!
//! Per-device renewal credentials with single-use rotation: at most one
//! active record per (user, device) pair, and at most one successful
//! rotation per presented secret.

mod store;

#[cfg(test)]
mod tests;

pub use store::RefreshTokenStore;
