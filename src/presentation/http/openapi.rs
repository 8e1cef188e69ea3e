// src/presentation/http/openapi.rs
use crate::application::dto::{
    AboutDto, AdminArticleListDto, ArticleDto, ArticleEditorDto, ArticleLinkDto,
    ArticleSummaryDto, ArticleViewDto, CategoryDto, CategoryPageDto, DashboardDto, HomeDto,
    MediaDto, MediaLibraryDto, Notice, NoticeLevel, ResourceDto, ResourceGroupDto,
    ResourceGroupsDto, ResourceListDto, SearchResultDto, TimelineDto, TimelineEntryDto,
};
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use super::extractors::SESSION_COOKIE;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::public::home,
        crate::presentation::http::controllers::public::journal,
        crate::presentation::http::controllers::public::category,
        crate::presentation::http::controllers::public::article,
        crate::presentation::http::controllers::public::timeline,
        crate::presentation::http::controllers::public::resources,
        crate::presentation::http::controllers::public::about,
        crate::presentation::http::controllers::public::search,
        crate::presentation::http::controllers::auth::login_page,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::admin_articles::dashboard,
        crate::presentation::http::controllers::admin_articles::list_articles,
        crate::presentation::http::controllers::admin_articles::new_article_form,
        crate::presentation::http::controllers::admin_articles::create_article,
        crate::presentation::http::controllers::admin_articles::edit_article_form,
        crate::presentation::http::controllers::admin_articles::update_article,
        crate::presentation::http::controllers::admin_articles::delete_article,
        crate::presentation::http::controllers::admin_media::library,
        crate::presentation::http::controllers::admin_media::upload,
        crate::presentation::http::controllers::admin_media::delete,
        crate::presentation::http::controllers::admin_timeline::list,
        crate::presentation::http::controllers::admin_timeline::create,
        crate::presentation::http::controllers::admin_timeline::delete,
        crate::presentation::http::controllers::admin_resources::list,
        crate::presentation::http::controllers::admin_resources::create,
        crate::presentation::http::controllers::admin_resources::delete,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginPageDto,
            crate::presentation::http::controllers::admin_articles::ArticleForm,
            crate::presentation::http::controllers::admin_timeline::TimelineForm,
            crate::presentation::http::controllers::admin_resources::ResourceForm,
            AboutDto,
            AdminArticleListDto,
            ArticleDto,
            ArticleEditorDto,
            ArticleLinkDto,
            ArticleSummaryDto,
            ArticleViewDto,
            CategoryDto,
            CategoryPageDto,
            DashboardDto,
            HomeDto,
            MediaDto,
            MediaLibraryDto,
            Notice,
            NoticeLevel,
            ResourceDto,
            ResourceGroupDto,
            ResourceGroupsDto,
            ResourceListDto,
            SearchResultDto,
            TimelineDto,
            TimelineEntryDto
        )
    ),
    tags(
        (name = "Public", description = "Read-only pages of the journal"),
        (name = "Auth", description = "Admin login and logout"),
        (name = "Admin", description = "Authoring: articles, media, timeline and resources"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&SessionCookieScheme),
    info(
        title = "robotblog",
        description = "Day-by-day project journal with a password-gated authoring area",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct SessionCookieScheme;

impl Modify for SessionCookieScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "sessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        );
    }
}

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}
