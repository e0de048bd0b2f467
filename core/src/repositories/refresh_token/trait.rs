//! Refresh token repository trait defining the interface for refresh token
//! persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::CoreResult;

/// Repository contract for RefreshToken records
///
/// Implementations persist one row per issued refresh credential. Records
/// are only ever deactivated, never deleted, so every rotation leaves an
/// audit trail.
///
/// # Security Considerations
/// - Only hashed secrets reach the repository; lookups are by hash
/// - `deactivate` must be a compare-and-set: the rotation single-use
///   guarantee rests on it
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Persist a new refresh token record
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved record
    /// * `Err(CoreError)` - Save failed (e.g., duplicate hash)
    async fn save(&self, token: RefreshToken) -> CoreResult<RefreshToken>;

    /// Find a refresh token record by its hashed secret
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Record found (active or not)
    /// * `Ok(None)` - No record with this hash
    async fn find_by_token_hash(&self, token_hash: &str) -> CoreResult<Option<RefreshToken>>;

    /// Find the active record for a (user, device) pair, if any
    ///
    /// At most one record per pair is active at any time.
    async fn find_active_by_user_and_device(
        &self,
        user_id: i64,
        device_id: &str,
    ) -> CoreResult<Option<RefreshToken>>;

    /// Deactivate a record if, and only if, it is still active
    ///
    /// Must be atomic with respect to concurrent calls for the same id:
    /// exactly one caller observes `true` for a record that was active.
    ///
    /// # Returns
    /// * `Ok(true)` - This call deactivated the record
    /// * `Ok(false)` - The record was missing or already inactive
    async fn deactivate(&self, id: Uuid) -> CoreResult<bool>;
}
