//! In-memory implementation of RefreshTokenRepository for tests and local
//! development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::{CoreError, CoreResult};

use super::r#trait::RefreshTokenRepository;

/// In-memory refresh token repository
///
/// Holds all records behind a single `RwLock`, which makes `deactivate` a
/// genuine compare-and-set: concurrent callers serialize on the write lock
/// and only the first sees the record active.
pub struct InMemoryRefreshTokenRepository {
    tokens: Arc<RwLock<HashMap<Uuid, RefreshToken>>>,
}

impl InMemoryRefreshTokenRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of records, active or not
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Whether the repository holds no records
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl Default for InMemoryRefreshTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenRepository for InMemoryRefreshTokenRepository {
    async fn save(&self, token: RefreshToken) -> CoreResult<RefreshToken> {
        let mut tokens = self.tokens.write().await;

        if tokens.values().any(|t| t.token_hash == token.token_hash) {
            return Err(CoreError::Persistence {
                message: "refresh token hash already exists".to_string(),
            });
        }

        tokens.insert(token.id, token.clone());
        Ok(token)
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> CoreResult<Option<RefreshToken>> {
        let tokens = self.tokens.read().await;
        Ok(tokens.values().find(|t| t.token_hash == token_hash).cloned())
    }

    async fn find_active_by_user_and_device(
        &self,
        user_id: i64,
        device_id: &str,
    ) -> CoreResult<Option<RefreshToken>> {
        let tokens = self.tokens.read().await;
        Ok(tokens
            .values()
            .find(|t| t.user_id == user_id && t.device_id == device_id && t.is_active)
            .cloned())
    }

    async fn deactivate(&self, id: Uuid) -> CoreResult<bool> {
        let mut tokens = self.tokens.write().await;
        match tokens.get_mut(&id) {
            Some(token) if token.is_active => {
                token.deactivate();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
