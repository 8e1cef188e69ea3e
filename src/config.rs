// src/config.rs
use crate::infrastructure::security::cookie_session_store::MIN_SECRET_LEN as MIN_SESSION_SECRET_LEN;
use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;

/// Where admin sessions live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionBackend {
    Memory,
    /// Stateless HMAC-signed cookie; the secret is at least 32 bytes.
    Cookie { secret: String },
    Redis { url: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    upload_dir: PathBuf,
    admin_username: String,
    admin_password_hash: String,
    session_backend: SessionBackend,
    session_ttl: Duration,
    seed_demo_data: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://robotblog.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_upload_dir() -> String {
    "static/uploads".into()
}

fn default_session_ttl() -> u64 {
    12 * 60 * 60
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!("{key}: expected a boolean, got {other}"))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, after loading a `.env`
    /// file when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let upload_dir = PathBuf::from(get("UPLOAD_DIR").unwrap_or_else(default_upload_dir));
        let admin_username = get("ADMIN_USERNAME").unwrap_or_else(|| "admin".into());
        let admin_password_hash =
            get("ADMIN_PASSWORD_HASH").ok_or(ConfigError::Missing("ADMIN_PASSWORD_HASH"))?;

        let session_backend = match get("SESSION_BACKEND")
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("memory") => SessionBackend::Memory,
            Some("cookie") => {
                let secret =
                    get("SESSION_SECRET").ok_or(ConfigError::Missing("SESSION_SECRET"))?;
                if secret.len() < MIN_SESSION_SECRET_LEN {
                    return Err(ConfigError::Invalid(format!(
                        "SESSION_SECRET must be at least {MIN_SESSION_SECRET_LEN} bytes"
                    )));
                }
                SessionBackend::Cookie { secret }
            }
            Some("redis") => SessionBackend::Redis {
                url: get("REDIS_URL").ok_or(ConfigError::Missing("REDIS_URL"))?,
            },
            Some(other) => {
                return Err(ConfigError::Invalid(format!(
                    "SESSION_BACKEND must be memory, cookie or redis, got {other}"
                )));
            }
        };

        let session_ttl_secs = match get("SESSION_TTL_SECONDS") {
            None => default_session_ttl(),
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!("SESSION_TTL_SECONDS must be a positive integer, got {raw}"))
                })?,
        };

        let seed_demo_data = match get("SEED_DEMO_DATA") {
            None => true,
            Some(raw) => parse_bool("SEED_DEMO_DATA", &raw)?,
        };

        Ok(Self {
            database_url,
            listen_addr,
            upload_dir,
            admin_username,
            admin_password_hash,
            session_backend,
            session_ttl: Duration::from_secs(session_ttl_secs),
            seed_demo_data,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn upload_dir(&self) -> &PathBuf {
        &self.upload_dir
    }

    pub fn admin_username(&self) -> &str {
        &self.admin_username
    }

    pub fn admin_password_hash(&self) -> &str {
        &self.admin_password_hash
    }

    pub fn session_backend(&self) -> &SessionBackend {
        &self.session_backend
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    pub fn seed_demo_data(&self) -> bool {
        self.seed_demo_data
    }
}
