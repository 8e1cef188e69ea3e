// src/infrastructure/security/redis_session_store.rs
use crate::application::ApplicationResult;
use crate::application::dto::AdminSession;
use crate::application::error::ApplicationError;
use crate::application::ports::session::SessionStore;
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;
use uuid::Uuid;

const KEY_PREFIX: &str = "robotblog:session:";

/// Sessions stored as JSON under a uuid key; Redis expires them with the
/// session.
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Pool,
}

impl RedisSessionStore {
    /// Create a new Redis backed session store from a redis URL (e.g. redis://:password@host:6379/0)
    pub fn from_url(url: &str) -> Result<Self, ApplicationError> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { pool })
    }

    async fn conn(&self) -> ApplicationResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

fn key(token: &str) -> String {
    format!("{KEY_PREFIX}{token}")
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn create(&self, session: AdminSession) -> ApplicationResult<String> {
        let token = Uuid::new_v4().to_string();
        let ttl = (session.expires_at - session.issued_at).num_seconds().max(1);
        let ttl = u64::try_from(ttl).unwrap_or(1);
        let payload = serde_json::to_string(&session)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let mut conn = self.conn().await?;
        conn.set_ex::<_, _, ()>(key(&token), payload, ttl)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(token)
    }

    async fn load(&self, token: &str) -> ApplicationResult<Option<AdminSession>> {
        let mut conn = self.conn().await?;
        let payload: Option<String> = conn
            .get(key(token))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(payload.and_then(|raw| match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable session payload");
                None
            }
        }))
    }

    async fn destroy(&self, token: &str) -> ApplicationResult<()> {
        let mut conn = self.conn().await?;
        conn.del::<_, ()>(key(token))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }
}
