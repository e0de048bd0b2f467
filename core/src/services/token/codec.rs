//! Access-token codec: signed JWT issuance and decoding

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::clock::Clock;
use crate::domain::entities::token::Claims;
use crate::errors::{CoreError, CoreResult, TokenError};

use super::config::TokenCodecConfig;

/// Source of a token's claimed expiry, without cryptographic certainty
///
/// The logged-out token cache only needs the `exp` claim to size an entry's
/// TTL, so extraction must not fail for merely-expired tokens and must not
/// require the signature to verify. The trait seam lets tests count how
/// often the extraction actually runs.
pub trait TokenExpirySource: Send + Sync {
    /// The token's claimed `exp` as a UTC instant
    fn expiry_of(&self, token: &str) -> Result<DateTime<Utc>, TokenError>;
}

/// Codec for signed, self-describing access tokens
///
/// A pure function of its inputs, the configured signing key, and the
/// injected clock. The key is read-only for the life of the process.
pub struct TokenCodec {
    config: TokenCodecConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// Verifies the signature; expiry is the validator's step, checked
    /// against the injected clock rather than the system time
    validation: Validation,
    /// Parses claims without verifying the signature, for expiry extraction
    insecure_validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Creates a new codec
    ///
    /// # Errors
    ///
    /// `CoreError::Config` when the signing secret is empty; this surfaces
    /// once at startup rather than per request.
    pub fn new(config: TokenCodecConfig, clock: Arc<dyn Clock>) -> CoreResult<Self> {
        if config.jwt_secret.is_empty() {
            return Err(CoreError::Config {
                message: "JWT signing secret must not be empty".to_string(),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let mut insecure_validation = Validation::new(Algorithm::HS256);
        insecure_validation.insecure_disable_signature_validation();
        insecure_validation.validate_exp = false;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            insecure_validation,
            clock,
        })
    }

    /// Issues a signed access token for a subject and its authority set
    ///
    /// Embeds `iat = now` and `exp = now + configured TTL`.
    pub fn issue(&self, subject_id: i64, authorities: Vec<String>) -> CoreResult<String> {
        let now = self.clock.now();
        let expires_at = now + Duration::seconds(self.config.access_token_expiry_seconds);
        let claims = Claims::new(subject_id, authorities, now, expires_at, &self.config.issuer);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            CoreError::Internal {
                message: format!("failed to sign access token: {e}"),
            }
        })
    }

    /// Issues a token carrying only the subject, with an empty authority set
    ///
    /// Used by the refresh path, where the rotated record proves the subject
    /// but nothing else.
    pub fn issue_for_subject(&self, subject_id: i64) -> CoreResult<String> {
        self.issue(subject_id, Vec::new())
    }

    /// Decodes a token and verifies its signature
    ///
    /// Expiry is deliberately not checked here; the validator owns that
    /// step.
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidSignature` - signature does not verify
    /// * `TokenError::Malformed` - the string is not a parseable JWT
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })
    }

    /// Access token lifetime in seconds, for response payloads
    pub fn expiry_duration_seconds(&self) -> i64 {
        self.config.access_token_expiry_seconds
    }
}

impl TokenExpirySource for TokenCodec {
    fn expiry_of(&self, token: &str) -> Result<DateTime<Utc>, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.insecure_validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Malformed)?;

        Utc.timestamp_opt(claims.exp, 0)
            .single()
            .ok_or(TokenError::Malformed)
    }
}
