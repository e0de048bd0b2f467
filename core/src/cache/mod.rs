//! Logged-out token cache
//!
//! This cache maintains the state needed to invalidate access tokens after a
//! successful logout. Since the tokens are immutable and self-verifying, they
//! would otherwise remain acceptable until they expire on their own.

mod revocation;


pub use revocation::RevocationCache;

use crate::domain::entities::logout::LogoutRecord;
use crate::errors::CoreResult;

/// Revocation state consulted by the validation pipeline
///
/// The trait exists so the validator and the session facade take the seam
/// rather than the concrete cache, which keeps both testable with counting
/// or stub implementations.
pub trait RevocationStore: Send + Sync {
    /// Remember that this record's exact token string must be rejected
    ///
    /// Idempotent per token string; a duplicate call is a no-op.
    fn mark_revoked(&self, record: LogoutRecord) -> CoreResult<()>;

    /// Look up the logout record for a token string
    ///
    /// `None` covers both "never revoked" and "entry already past the
    /// token's own expiry"; a miss is a normal outcome, not an error.
    fn lookup(&self, token: &str) -> Option<LogoutRecord>;
}
