// src/application/commands/auth.rs
use std::sync::Arc;

use chrono::Duration;

use crate::application::{
    dto::{AdminContext, AdminSession, LoginResult},
    error::{ApplicationError, ApplicationResult},
    ports::{security::PasswordHasher, session::SessionStore, time::Clock},
};

pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

/// Login/logout for the single configured administrator.
pub struct AuthService {
    username: String,
    password_hash: String,
    hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl AuthService {
    pub fn new(
        username: String,
        password_hash: String,
        hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        ttl: Duration,
    ) -> Self {
        Self {
            username,
            password_hash,
            hasher,
            sessions,
            clock,
            ttl,
        }
    }

    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginResult> {
        // Both checks report the same error so the username is not revealed.
        if command.username.trim() != self.username {
            tracing::warn!("admin login refused: unknown username");
            return Err(ApplicationError::unauthorized("invalid credentials"));
        }
        self.hasher
            .verify(&command.password, &self.password_hash)
            .await
            .inspect_err(|_| tracing::warn!("admin login refused: bad password"))?;

        let now = self.clock.now();
        let session = AdminSession {
            username: self.username.clone(),
            issued_at: now,
            expires_at: now + self.ttl,
        };
        let token = self.sessions.create(session.clone()).await?;
        tracing::info!(admin = %session.username, expires_at = %session.expires_at, "admin logged in");

        Ok(LoginResult { token, session })
    }

    /// Resolve a session token. `None` for unknown, expired or foreign
    /// sessions; expired ones are dropped from the store.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<Option<AdminContext>> {
        let Some(session) = self.sessions.load(token).await? else {
            return Ok(None);
        };

        if session.is_expired(self.clock.now()) {
            tracing::debug!(admin = %session.username, "admin session expired");
            self.sessions.destroy(token).await?;
            return Ok(None);
        }
        if session.username != self.username {
            return Ok(None);
        }

        Ok(Some(AdminContext {
            username: session.username,
            token: token.to_string(),
            expires_at: session.expires_at,
        }))
    }

    pub async fn logout(&self, actor: &AdminContext) -> ApplicationResult<()> {
        self.sessions.destroy(&actor.token).await?;
        tracing::info!(admin = %actor.username, "admin logged out");
        Ok(())
    }

    pub const fn session_ttl(&self) -> Duration {
        self.ttl
    }
}
