//! Authentication session facade implementation

use std::sync::Arc;

use tracing::info;

use crate::cache::RevocationStore;
use crate::domain::clock::Clock;
use crate::domain::entities::device::DeviceIdentity;
use crate::domain::entities::logout::LogoutRecord;
use crate::domain::value_objects::AuthTokens;
use crate::errors::{CoreResult, TokenError};
use crate::repositories::refresh_token::RefreshTokenRepository;
use crate::services::refresh::RefreshTokenStore;
use crate::services::token::TokenCodec;

use super::verifier::CredentialVerifier;

/// Session facade composing the codec, refresh store, and revocation cache
///
/// Per (user, device) pair the session moves NoSession -> Authenticated on
/// login, stays Authenticated through refresh (new credentials each time),
/// and ends at logout; a later login starts a fresh session.
pub struct AuthSessionService<V, R, C>
where
    V: CredentialVerifier,
    R: RefreshTokenRepository,
    C: RevocationStore,
{
    verifier: Arc<V>,
    codec: Arc<TokenCodec>,
    refresh_store: Arc<RefreshTokenStore<R>>,
    revocation: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<V, R, C> AuthSessionService<V, R, C>
where
    V: CredentialVerifier,
    R: RefreshTokenRepository,
    C: RevocationStore,
{
    /// Creates the session facade
    pub fn new(
        verifier: Arc<V>,
        codec: Arc<TokenCodec>,
        refresh_store: Arc<RefreshTokenStore<R>>,
        revocation: Arc<C>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            verifier,
            codec,
            refresh_store,
            revocation,
            clock,
        }
    }

    /// Logs a user in on a device
    ///
    /// Delegates the credential check to the external verifier, then issues
    /// an access token and a device-bound refresh credential. Any refresh
    /// credential previously active for the device is replaced.
    pub async fn login(
        &self,
        identifier: &str,
        secret: &str,
        device: &DeviceIdentity,
    ) -> CoreResult<AuthTokens> {
        let principal = self.verifier.verify(identifier, secret).await?;

        let access_token = self
            .codec
            .issue(principal.id, principal.authorities.clone())?;
        let refresh = self.refresh_store.issue(principal.id, device).await?;

        info!(user_id = principal.id, device_id = %device.device_id, "user logged in");
        Ok(AuthTokens::bearer(
            access_token,
            refresh.secret,
            self.codec.expiry_duration_seconds(),
        ))
    }

    /// Exchanges a refresh secret for fresh credentials
    ///
    /// Rotates the refresh credential (single use) and issues a new access
    /// token for the same subject. The store's specific failure surfaces
    /// unchanged so the caller can tell a replay from an unknown secret.
    pub async fn refresh(&self, refresh_secret: &str) -> CoreResult<AuthTokens> {
        let rotated = self.refresh_store.rotate(refresh_secret).await?;
        let access_token = self.codec.issue_for_subject(rotated.token.user_id)?;

        info!(
            user_id = rotated.token.user_id,
            device_id = %rotated.token.device_id,
            "access token refreshed"
        );
        Ok(AuthTokens::bearer(
            access_token,
            rotated.secret,
            self.codec.expiry_duration_seconds(),
        ))
    }

    /// Logs a device out
    ///
    /// Records the still-valid access token in the revocation cache until
    /// its natural expiry and revokes the device's refresh credential. Both
    /// steps are idempotent; a double logout is not an error.
    pub async fn logout(
        &self,
        access_token: &str,
        user_email: &str,
        device: &DeviceIdentity,
    ) -> CoreResult<()> {
        let claims = self.codec.decode(access_token)?;
        let user_id = claims.subject_id().map_err(|_| TokenError::Malformed)?;

        let record = LogoutRecord::new(
            access_token,
            user_email,
            self.clock.now(),
            Some(device.clone()),
        );
        self.revocation.mark_revoked(record)?;
        self.refresh_store.revoke(user_id, &device.device_id).await?;

        info!(user_id, device_id = %device.device_id, "user logged out");
        Ok(())
    }
}
