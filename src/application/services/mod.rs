// src/application/services/mod.rs
use std::sync::Arc;

use chrono::Duration;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, auth::AuthService, media::MediaCommandService,
            resources::ResourceCommandService, timeline::TimelineCommandService,
        },
        ports::{
            security::PasswordHasher, session::SessionStore, storage::MediaStorage, time::Clock,
            util::SlugGenerator,
        },
        queries::{
            articles::ArticleQueryService, dashboard::DashboardQueryService,
            media::MediaQueryService, resources::ResourceQueryService,
            timeline::TimelineQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        media::MediaRepository,
        resource::ResourceRepository,
        timeline::TimelineRepository,
    },
};

/// Repositories backing the application services.
pub struct Repositories {
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub media: Arc<dyn MediaRepository>,
    pub timeline: Arc<dyn TimelineRepository>,
    pub resources: Arc<dyn ResourceRepository>,
}

/// Identity of the single administrator and how long a login lasts.
pub struct AdminCredentials {
    pub username: String,
    pub password_hash: String,
    pub session_ttl: Duration,
}

/// Infrastructure adapters injected through the application ports.
pub struct Adapters {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub sessions: Arc<dyn SessionStore>,
    pub storage: Arc<dyn MediaStorage>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
}

pub struct ApplicationServices {
    pub auth: Arc<AuthService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub media_commands: Arc<MediaCommandService>,
    pub media_queries: Arc<MediaQueryService>,
    pub timeline_commands: Arc<TimelineCommandService>,
    pub timeline_queries: Arc<TimelineQueryService>,
    pub resource_commands: Arc<ResourceCommandService>,
    pub resource_queries: Arc<ResourceQueryService>,
    pub dashboard: Arc<DashboardQueryService>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, adapters: Adapters, admin: AdminCredentials) -> Self {
        let auth = Arc::new(AuthService::new(
            admin.username,
            admin.password_hash,
            Arc::clone(&adapters.password_hasher),
            Arc::clone(&adapters.sessions),
            Arc::clone(&adapters.clock),
            admin.session_ttl,
        ));

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&adapters.slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            slug_service,
            Arc::clone(&adapters.storage),
            Arc::clone(&adapters.clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.article_write),
        ));

        let media_commands = Arc::new(MediaCommandService::new(
            Arc::clone(&repos.media),
            Arc::clone(&adapters.storage),
            Arc::clone(&adapters.clock),
        ));
        let media_queries = Arc::new(MediaQueryService::new(Arc::clone(&repos.media)));

        let timeline_commands = Arc::new(TimelineCommandService::new(Arc::clone(&repos.timeline)));
        let timeline_queries = Arc::new(TimelineQueryService::new(Arc::clone(&repos.timeline)));

        let resource_commands =
            Arc::new(ResourceCommandService::new(Arc::clone(&repos.resources)));
        let resource_queries = Arc::new(ResourceQueryService::new(Arc::clone(&repos.resources)));

        let dashboard = Arc::new(DashboardQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.media),
        ));

        Self {
            auth,
            article_commands,
            article_queries,
            media_commands,
            media_queries,
            timeline_commands,
            timeline_queries,
            resource_commands,
            resource_queries,
            dashboard,
        }
    }
}
