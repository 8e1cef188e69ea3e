// src/presentation/http/controllers/public.rs
use crate::application::{
    dto::{
        AboutDto, ArticleSummaryDto, ArticleViewDto, CategoryPageDto, HomeDto, PageDto,
        ResourceGroupsDto, SearchResultDto, TimelineDto,
    },
    queries::articles::SearchArticlesQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PageParams {
    /// 1-based page number; anything unparsable or below 1 means page 1.
    #[serde(default)]
    pub page: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map_or(1, |page| u32::try_from(page.max(1)).unwrap_or(u32::MAX))
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Latest articles and project stats.", body = HomeDto)),
    tag = "Public"
)]
pub async fn home(Extension(state): Extension<HttpState>) -> HttpResult<Json<HomeDto>> {
    state.services.article_queries.home().await.into_http().map(Json)
}

#[utoipa::path(
    get,
    path = "/journal",
    params(PageParams),
    responses((status = 200, description = "Published articles by project day.", body = PageDto<ArticleSummaryDto>)),
    tag = "Public"
)]
pub async fn journal(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PageDto<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .journal(Some(params.page()))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/categorie/{category}",
    params(("category" = String, Path, description = "Category key"), PageParams),
    responses(
        (status = 200, description = "Published articles in one category.", body = CategoryPageDto),
        (status = 404, description = "Unknown category.", body = ErrorResponse)
    ),
    tag = "Public"
)]
pub async fn category(
    Extension(state): Extension<HttpState>,
    Path(category): Path<String>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<CategoryPageDto>> {
    state
        .services
        .article_queries
        .category(&category, Some(params.page()))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/article/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article with its neighbours; counts one view.", body = ArticleViewDto),
        (status = 404, description = "No published article with this slug.", body = ErrorResponse)
    ),
    tag = "Public"
)]
pub async fn article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleViewDto>> {
    state
        .services
        .article_queries
        .read_article(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/timeline",
    responses((status = 200, description = "Project milestones by date.", body = TimelineDto)),
    tag = "Public"
)]
pub async fn timeline(Extension(state): Extension<HttpState>) -> HttpResult<Json<TimelineDto>> {
    state
        .services
        .timeline_queries
        .timeline(None)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/ressources",
    responses((status = 200, description = "Resource links grouped by category.", body = ResourceGroupsDto)),
    tag = "Public"
)]
pub async fn resources(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ResourceGroupsDto>> {
    state
        .services
        .resource_queries
        .grouped()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/a-propos",
    responses((status = 200, description = "About page context.", body = AboutDto)),
    tag = "Public"
)]
pub async fn about(Extension(state): Extension<HttpState>) -> HttpResult<Json<AboutDto>> {
    state.services.article_queries.about().await.into_http().map(Json)
}

#[utoipa::path(
    get,
    path = "/recherche",
    params(SearchParams),
    responses((status = 200, description = "Published articles matching the query.", body = SearchResultDto)),
    tag = "Public"
)]
pub async fn search(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<SearchResultDto>> {
    state
        .services
        .article_queries
        .search(SearchArticlesQuery {
            query: params.q.unwrap_or_default(),
        })
        .await
        .into_http()
        .map(Json)
}
