// src/infrastructure/security/mod.rs
pub mod cookie_session_store;
pub mod password;
pub mod redis_session_store;
pub mod session_store;

pub use cookie_session_store::SignedCookieSessionStore;
pub use password::Argon2PasswordHasher;
pub use redis_session_store::RedisSessionStore;
pub use session_store::InMemorySessionStore;
