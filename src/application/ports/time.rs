// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for publication stamps, upload names and session expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
