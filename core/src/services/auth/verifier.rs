//! Credential verification seam

use async_trait::async_trait;

use crate::domain::entities::principal::Principal;
use crate::errors::CoreResult;

/// External credential check consumed as an opaque collaborator
///
/// The user store and password hashing live outside this crate; the core
/// only needs "these credentials name this principal, or they do not".
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verify an identifier/secret pair
    ///
    /// # Returns
    /// * `Ok(Principal)` - the authenticated user
    /// * `Err(CoreError::Auth(AuthError::AuthenticationFailed))` - the pair
    ///   was rejected
    async fn verify(&self, identifier: &str, secret: &str) -> CoreResult<Principal>;
}
