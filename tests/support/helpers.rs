// tests/support/helpers.rs
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, Response, header};
use chrono::Duration;
use robotblog::application::ports::time::Clock;
use robotblog::application::services::{
    AdminCredentials, Adapters, ApplicationServices, Repositories,
};
use robotblog::infrastructure::{
    database::{init_pool, run_migrations},
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteMediaRepository,
        SqliteResourceRepository, SqliteTimelineRepository,
    },
    security::InMemorySessionStore,
    storage::LocalMediaStorage,
    util::DefaultSlugGenerator,
};
use robotblog::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::util::ServiceExt as _;

use super::mocks::{DummyPasswordHasher, FixedClock};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "robot-secret";

/// A fully wired application over a throwaway SQLite file and upload
/// directory. Both disappear with `root`.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub pool: Arc<SqlitePool>,
    pub upload_dir: PathBuf,
    root: TempDir,
}

impl TestApp {
    pub fn router(&self) -> Router {
        build_router(HttpState {
            services: Arc::clone(&self.services),
            upload_dir: self.upload_dir.clone(),
        })
    }

    pub fn article_read(&self) -> SqliteArticleReadRepository {
        SqliteArticleReadRepository::new(Arc::clone(&self.pool))
    }

    pub fn article_write(&self) -> SqliteArticleWriteRepository {
        SqliteArticleWriteRepository::new(Arc::clone(&self.pool))
    }

    pub fn timeline(&self) -> SqliteTimelineRepository {
        SqliteTimelineRepository::new(Arc::clone(&self.pool))
    }

    pub fn resources(&self) -> SqliteResourceRepository {
        SqliteResourceRepository::new(Arc::clone(&self.pool))
    }

    pub fn uploaded_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.upload_dir)
            .expect("read upload dir")
            .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_clock(Arc::new(FixedClock)).await
}

pub async fn spawn_app_with_clock(clock: Arc<dyn Clock>) -> TestApp {
    let root = tempfile::tempdir().expect("tempdir");
    let database_url = format!("sqlite://{}", root.path().join("robotblog.db").display());
    let pool = init_pool(&database_url).await.expect("sqlite pool");
    run_migrations(&pool).await.expect("migrations");
    let pool = Arc::new(pool);

    let upload_dir = root.path().join("uploads");
    let storage = LocalMediaStorage::init(upload_dir.clone())
        .await
        .expect("upload dir");

    let repos = Repositories {
        article_write: Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool))),
        article_read: Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool))),
        media: Arc::new(SqliteMediaRepository::new(Arc::clone(&pool))),
        timeline: Arc::new(SqliteTimelineRepository::new(Arc::clone(&pool))),
        resources: Arc::new(SqliteResourceRepository::new(Arc::clone(&pool))),
    };
    let adapters = Adapters {
        password_hasher: Arc::new(DummyPasswordHasher),
        sessions: Arc::new(InMemorySessionStore::new()),
        storage: Arc::new(storage),
        clock,
        slugger: Arc::new(DefaultSlugGenerator),
    };
    let admin = AdminCredentials {
        username: ADMIN_USERNAME.into(),
        password_hash: ADMIN_PASSWORD.into(),
        session_ttl: Duration::hours(2),
    };

    TestApp {
        services: Arc::new(ApplicationServices::new(repos, adapters, admin)),
        pool,
        upload_dir,
        root,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .expect("request")
}

pub fn post_form(uri: &str, fields: &[(&str, &str)], cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let body = serde_urlencoded::to_string(fields).expect("form body");
    builder.body(Body::from(body)).expect("request")
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!("invalid json ({err}): {}", String::from_utf8_lossy(&bytes))
    })
}

pub fn location(resp: &Response<Body>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Log in through the form and return the `name=value` pair to send back.
pub async fn login_cookie(router: &Router) -> String {
    let resp = router
        .clone()
        .oneshot(post_form(
            "/admin/login",
            &[("username", ADMIN_USERNAME), ("password", ADMIN_PASSWORD)],
            None,
        ))
        .await
        .expect("login response");
    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("login sets a session cookie");
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}
