// src/application/ports/session.rs
use crate::application::{ApplicationResult, dto::AdminSession};
use async_trait::async_trait;

/// Backing store for admin sessions. The returned token is what the client
/// presents back (in the session cookie); its format is up to the store.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, session: AdminSession) -> ApplicationResult<String>;
    async fn load(&self, token: &str) -> ApplicationResult<Option<AdminSession>>;
    /// Forget the session. Unknown tokens are ignored.
    async fn destroy(&self, token: &str) -> ApplicationResult<()>;
}
