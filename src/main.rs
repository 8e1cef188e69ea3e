use anyhow::{Context, Result};
use robotblog::application::{
    ports::{
        security::PasswordHasher, session::SessionStore, storage::MediaStorage, time::Clock,
        util::SlugGenerator,
    },
    services::{AdminCredentials, Adapters, ApplicationServices, Repositories},
};
use robotblog::config::{AppConfig, SessionBackend};
use robotblog::infrastructure::{
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteMediaRepository,
        SqliteResourceRepository, SqliteTimelineRepository,
    },
    security::{
        Argon2PasswordHasher, InMemorySessionStore, RedisSessionStore, SignedCookieSessionStore,
        password::validate_phc_hash,
    },
    seed::DemoSeeder,
    storage::LocalMediaStorage,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use robotblog::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    validate_phc_hash(config.admin_password_hash())
        .map_err(|err| anyhow::anyhow!("ADMIN_PASSWORD_HASH is not a valid PHC string: {err}"))?;

    let pool = database::init_pool(config.database_url())
        .await
        .with_context(|| format!("opening {}", config.database_url()))?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let repos = Repositories {
        article_write: Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool))),
        article_read: Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool))),
        media: Arc::new(SqliteMediaRepository::new(Arc::clone(&pool))),
        timeline: Arc::new(SqliteTimelineRepository::new(Arc::clone(&pool))),
        resources: Arc::new(SqliteResourceRepository::new(Arc::clone(&pool))),
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let storage = LocalMediaStorage::init(config.upload_dir()).await?;
    let storage: Arc<dyn MediaStorage> = Arc::new(storage);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let sessions = session_store(config.session_backend())?;

    if config.seed_demo_data() {
        DemoSeeder {
            article_read: repos.article_read.as_ref(),
            article_write: repos.article_write.as_ref(),
            timeline: repos.timeline.as_ref(),
            resources: repos.resources.as_ref(),
            clock: clock.as_ref(),
        }
        .seed_if_empty()
        .await?;
    }

    let session_ttl = chrono::Duration::from_std(config.session_ttl())
        .context("SESSION_TTL_SECONDS out of range")?;
    let services = Arc::new(ApplicationServices::new(
        repos,
        Adapters {
            password_hasher,
            sessions,
            storage,
            clock,
            slugger,
        },
        AdminCredentials {
            username: config.admin_username().to_string(),
            password_hash: config.admin_password_hash().to_string(),
            session_ttl,
        },
    ));

    let state = HttpState {
        services,
        upload_dir: config.upload_dir().clone(),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn session_store(backend: &SessionBackend) -> Result<Arc<dyn SessionStore>> {
    let store: Arc<dyn SessionStore> = match backend {
        SessionBackend::Memory => Arc::new(InMemorySessionStore::new()),
        SessionBackend::Cookie { secret } => {
            Arc::new(SignedCookieSessionStore::new(secret.as_bytes())?)
        }
        SessionBackend::Redis { url } => Arc::new(RedisSessionStore::from_url(url)?),
    };
    tracing::info!(backend = backend_name(backend), "session store ready");
    Ok(store)
}

const fn backend_name(backend: &SessionBackend) -> &'static str {
    match backend {
        SessionBackend::Memory => "memory",
        SessionBackend::Cookie { .. } => "cookie",
        SessionBackend::Redis { .. } => "redis",
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
