//! Session token registry for the mock authentication layer.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

/// Live session tokens mapped to user ids. Tokens are opaque uuids; there
/// is no expiry — sessions last until logout or process restart, matching
/// the in-memory lifetime of the rest of the app state.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    tokens: Arc<RwLock<HashMap<String, u64>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh token for `user_id`.
    pub async fn issue(&self, user_id: u64) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens.write().await.insert(token.clone(), user_id);
        token
    }

    /// Drop a token; returns false when it was not live.
    pub async fn revoke(&self, token: &str) -> bool {
        self.tokens.write().await.remove(token).is_some()
    }

    pub async fn user_id(&self, token: &str) -> Option<u64> {
        self.tokens.read().await.get(token).copied()
    }

    pub async fn is_live(&self, token: &str) -> bool {
        self.tokens.read().await.contains_key(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn issue_then_revoke_lifecycle() {
        let sessions = SessionStore::new();
        let token = sessions.issue(7).await;
        assert_eq!(sessions.user_id(&token).await, Some(7));
        assert!(sessions.is_live(&token).await);

        assert!(sessions.revoke(&token).await);
        assert!(!sessions.is_live(&token).await);
        assert!(!sessions.revoke(&token).await);
    }

    #[tokio::test]
    async fn tokens_are_unique_per_issue() {
        let sessions = SessionStore::new();
        let a = sessions.issue(1).await;
        let b = sessions.issue(1).await;
        assert_ne!(a, b);
    }
}
