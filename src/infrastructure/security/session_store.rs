use crate::application::{
    dto::AdminSession,
    error::{ApplicationError, ApplicationResult},
    ports::session::SessionStore,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Process-local sessions keyed by random uuid tokens. Sessions are lost on
/// restart and are not shared between instances.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, AdminSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_sessions<T>(
        &self,
        f: impl FnOnce(&mut HashMap<String, AdminSession>) -> T,
    ) -> ApplicationResult<T> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|_| ApplicationError::infrastructure("session store lock poisoned"))?;
        Ok(f(&mut guard))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, session: AdminSession) -> ApplicationResult<String> {
        let token = Uuid::new_v4().to_string();
        self.with_sessions(|sessions| {
            // Drop anything already past its expiry while we hold the lock.
            let now = session.issued_at;
            sessions.retain(|_, existing| !existing.is_expired(now));
            sessions.insert(token.clone(), session);
        })?;
        Ok(token)
    }

    async fn load(&self, token: &str) -> ApplicationResult<Option<AdminSession>> {
        self.with_sessions(|sessions| sessions.get(token).cloned())
    }

    async fn destroy(&self, token: &str) -> ApplicationResult<()> {
        self.with_sessions(|sessions| {
            sessions.remove(token);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn session(ttl_minutes: i64) -> AdminSession {
        let now = Utc::now();
        AdminSession {
            username: "admin".into(),
            issued_at: now,
            expires_at: now + Duration::minutes(ttl_minutes),
        }
    }

    #[tokio::test]
    async fn create_load_destroy() {
        let store = InMemorySessionStore::new();
        let token = store.create(session(10)).await.unwrap();
        assert_eq!(store.load(&token).await.unwrap().unwrap().username, "admin");

        store.destroy(&token).await.unwrap();
        assert!(store.load(&token).await.unwrap().is_none());
        // Unknown tokens are ignored.
        store.destroy("nope").await.unwrap();
    }

    #[tokio::test]
    async fn tokens_are_unique() {
        let store = InMemorySessionStore::new();
        let a = store.create(session(10)).await.unwrap();
        let b = store.create(session(10)).await.unwrap();
        assert_ne!(a, b);
    }
}
