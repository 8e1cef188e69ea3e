// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use robotblog::application::{
    ApplicationResult, dto::AdminContext, error::ApplicationError,
    ports::security::PasswordHasher,
};

/// Compares against a plaintext "hash"; argon2 is exercised by its own unit tests.
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if password == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

pub fn admin_context() -> AdminContext {
    AdminContext {
        username: super::super::helpers::ADMIN_USERNAME.into(),
        token: "test-session".into(),
        expires_at: super::time::fixed_now() + Duration::hours(1),
    }
}
