use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-side record of a logged-in administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Request-scoped proof that the caller holds a live admin session. Every
/// authoring operation takes one.
#[derive(Debug, Clone)]
pub struct AdminContext {
    pub username: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub session: AdminSession,
}
