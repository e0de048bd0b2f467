//! Bounded, per-entry-TTL store of logged-out access tokens.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info, warn};

use crate::domain::clock::Clock;
use crate::domain::entities::logout::LogoutRecord;
use crate::errors::CoreResult;
use crate::services::token::TokenExpirySource;

use super::RevocationStore;

/// Cache entry: the logout record plus the instant it stops mattering
#[derive(Debug, Clone)]
struct RevokedEntry {
    record: LogoutRecord,
    /// UTC epoch second at which expiry checking would reject the token
    /// anyway; the entry is treated as absent from this second onward
    deadline: i64,
}

/// Bounded cache of logged-out access tokens
///
/// Each entry lives until the token's own claimed expiry: once a token is
/// past its `exp`, the validator's expiry step rejects it without the cache,
/// so remembering it longer only wastes memory. A max-size bound protects
/// the process against logout storms.
///
/// Expired entries are dropped passively, on lookup and on insert; there is
/// no background sweep. A cache holding only dead entries keeps its memory
/// until the next insert forces eviction, which is an accepted tradeoff.
pub struct RevocationCache<E: TokenExpirySource> {
    entries: DashMap<String, RevokedEntry>,
    max_entries: usize,
    expiry_source: Arc<E>,
    clock: Arc<dyn Clock>,
}

impl<E: TokenExpirySource> RevocationCache<E> {
    /// Creates a cache bounded at `max_entries` revoked tokens
    pub fn new(max_entries: usize, expiry_source: Arc<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries,
            expiry_source,
            clock,
        }
    }

    /// Number of entries currently held, live or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&self, record: LogoutRecord) -> CoreResult<()> {
        let token = record.token.clone();

        // Extract the claimed expiry exactly once per distinct token; the
        // contains_key pre-check in mark_revoked keeps duplicates from
        // paying for it again.
        let expires_at = self.expiry_source.expiry_of(&token)?;
        let now = self.clock.now_timestamp();
        let ttl = (expires_at.timestamp() - now).max(0);

        if self.entries.len() >= self.max_entries {
            self.evict_one(now);
        }

        info!(
            user_email = %record.user_email,
            ttl_seconds = ttl,
            "logout token cached until its claimed expiry"
        );
        self.entries
            .entry(token)
            .or_insert(RevokedEntry {
                record,
                deadline: now + ttl,
            });
        Ok(())
    }

    /// Frees one slot when the cache is at capacity
    ///
    /// Dead entries go first; otherwise the live entry closest to its own
    /// deadline is the cheapest to drop, since expiry checking would have
    /// rejected its token shortly anyway.
    fn evict_one(&self, now: i64) {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.deadline > now);
        if self.entries.len() < before {
            debug!(
                dropped = before - self.entries.len(),
                "dropped dead logout entries during capacity eviction"
            );
            return;
        }

        let victim = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().deadline)
            .map(|entry| entry.key().clone());
        if let Some(token) = victim {
            warn!("logout token cache at capacity, evicting the entry nearest its expiry");
            self.entries.remove(&token);
        }
    }
}

impl<E: TokenExpirySource> RevocationStore for RevocationCache<E> {
    fn mark_revoked(&self, record: LogoutRecord) -> CoreResult<()> {
        if self.entries.contains_key(&record.token) {
            info!(
                user_email = %record.user_email,
                "logout token is already present in the cache"
            );
            return Ok(());
        }
        self.insert(record)
    }

    fn lookup(&self, token: &str) -> Option<LogoutRecord> {
        let now = self.clock.now_timestamp();
        self.entries.remove_if(token, |_, entry| entry.deadline <= now);
        self.entries.get(token).map(|entry| entry.record.clone())
    }
}
