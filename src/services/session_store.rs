use std::collections::HashMap;

use async_trait::async_trait;
use rand::{distr::Alphanumeric, Rng};
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::user::User;

const SESSION_KEY_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub user_id: Uuid,
    pub username: String,
    pub created_at: OffsetDateTime,
}

impl SessionData {
    pub fn for_user(user: &User) -> Self {
        SessionData {
            user_id: user.id,
            username: user.username.clone(),
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores the session under a fresh random key and returns the key.
    async fn create(&self, data: SessionData) -> anyhow::Result<String>;

    async fn load(&self, key: &str) -> anyhow::Result<Option<SessionData>>;

    /// Deleting a key that doesn't exist is not an error.
    async fn delete(&self, key: &str) -> anyhow::Result<()>;
}

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, SessionData>>,
}

fn generate_session_key() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_KEY_LEN)
        .map(char::from)
        .collect()
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, data: SessionData) -> anyhow::Result<String> {
        let mut sessions = self.sessions.write().await;
        let mut key = generate_session_key();
        while sessions.contains_key(&key) {
            key = generate_session_key();
        }
        sessions.insert(key.clone(), data);
        Ok(key)
    }

    async fn load(&self, key: &str) -> anyhow::Result<Option<SessionData>> {
        Ok(self.sessions.read().await.get(key).cloned())
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        self.sessions.write().await.remove(key);
        Ok(())
    }
}
