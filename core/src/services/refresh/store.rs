//! Refresh token store implementation

use std::sync::Arc;

use rand::Rng;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::domain::clock::Clock;
use crate::domain::entities::device::DeviceIdentity;
use crate::domain::entities::token::{IssuedRefreshToken, RefreshToken};
use crate::errors::{CoreResult, RefreshTokenError};
use crate::repositories::refresh_token::RefreshTokenRepository;

/// Length of generated refresh secrets
const SECRET_LENGTH: usize = 32;

/// Store managing one active refresh credential per (user, device) pair
pub struct RefreshTokenStore<R: RefreshTokenRepository> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: RefreshTokenRepository> RefreshTokenStore<R> {
    /// Creates a store over the given repository
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Issues a fresh refresh credential for a (user, device) pair
    ///
    /// Any record still active for the pair is deactivated first, keeping
    /// the one-active-record invariant.
    pub async fn issue(
        &self,
        user_id: i64,
        device: &DeviceIdentity,
    ) -> CoreResult<IssuedRefreshToken> {
        if let Some(previous) = self
            .repository
            .find_active_by_user_and_device(user_id, &device.device_id)
            .await?
        {
            debug!(user_id, device_id = %device.device_id, "replacing active refresh token");
            self.repository.deactivate(previous.id).await?;
        }

        self.persist_new(user_id, &device.device_id).await
    }

    /// Rotates a refresh credential on use
    ///
    /// The presented secret buys exactly one rotation: the old record is
    /// deactivated through the repository's compare-and-set, so of two
    /// concurrent calls with the same secret one wins and the other
    /// observes `InactiveToken`.
    ///
    /// # Errors
    ///
    /// * `RefreshTokenError::UnknownToken` - no record matches the secret
    /// * `RefreshTokenError::InactiveToken` - the record was already
    ///   rotated or revoked (replay detection)
    pub async fn rotate(&self, presented_secret: &str) -> CoreResult<IssuedRefreshToken> {
        let token_hash = hash_secret(presented_secret);

        let current = self
            .repository
            .find_by_token_hash(&token_hash)
            .await?
            .ok_or(RefreshTokenError::UnknownToken)?;

        if !current.is_active {
            warn!(
                user_id = current.user_id,
                device_id = %current.device_id,
                "inactive refresh token presented, possible replay"
            );
            return Err(RefreshTokenError::InactiveToken.into());
        }

        // Claim the rotation; a concurrent caller that lost the race sees
        // the record already inactive.
        if !self.repository.deactivate(current.id).await? {
            return Err(RefreshTokenError::InactiveToken.into());
        }

        self.persist_new(current.user_id, &current.device_id).await
    }

    /// Deactivates the active credential for a (user, device) pair, if any
    ///
    /// Idempotent; revoking a pair with no active record is not an error.
    pub async fn revoke(&self, user_id: i64, device_id: &str) -> CoreResult<()> {
        if let Some(active) = self
            .repository
            .find_active_by_user_and_device(user_id, device_id)
            .await?
        {
            self.repository.deactivate(active.id).await?;
            debug!(user_id, device_id, "refresh token revoked");
        }
        Ok(())
    }

    async fn persist_new(&self, user_id: i64, device_id: &str) -> CoreResult<IssuedRefreshToken> {
        let secret = generate_secret();
        let token = RefreshToken::new(user_id, device_id, hash_secret(&secret), self.clock.now());
        let token = self.repository.save(token).await?;
        Ok(IssuedRefreshToken { secret, token })
    }
}

/// Generates a random alphanumeric secret
fn generate_secret() -> String {
    let mut rng = rand::thread_rng();
    (0..SECRET_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..62);
            match idx {
                0..10 => (b'0' + idx) as char,
                10..36 => (b'a' + idx - 10) as char,
                36..62 => (b'A' + idx - 36) as char,
                _ => unreachable!(),
            }
        })
        .collect()
}

/// Hashes a secret for storage and lookup
fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}
