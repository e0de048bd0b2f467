//! Authentication session module
//!
//! The facade the presentation layer drives:
//! - login: verify credentials, issue access + refresh tokens
//! - refresh: rotate the refresh credential, issue a new access token
//! - logout: revoke the access token and the device's refresh credential

mod service;
mod verifier;

#[cfg(test)]
mod tests;

pub use service::AuthSessionService;
pub use verifier::CredentialVerifier;
