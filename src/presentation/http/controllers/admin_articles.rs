// src/presentation/http/controllers/admin_articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{AdminArticleListDto, ArticleEditorDto, DashboardDto, UploadedFile},
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Admin;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path},
    response::Redirect,
};
use serde::Deserialize;
use utoipa::ToSchema;

const ARTICLES_PATH: &str = "/admin/articles";

/// Authoring form as posted by the admin editor. Field names follow the
/// existing form markup.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ArticleForm {
    pub titre: String,
    pub contenu: String,
    pub resume: String,
    pub categorie: Option<String>,
    pub jour: Option<String>,
    pub tags: String,
    /// Checkbox: present means checked, whatever the value.
    pub publie: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    #[serde(skip)]
    pub image_couverture: Option<UploadedFile>,
}

impl ArticleForm {
    async fn from_multipart(mut multipart: Multipart) -> HttpResult<Self> {
        let mut form = Self::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| HttpError::bad_request(err.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if name == "image_couverture" {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| HttpError::bad_request(err.body_text()))?;
                form.image_couverture = Some(UploadedFile { file_name, bytes });
                continue;
            }

            let value = field
                .text()
                .await
                .map_err(|err| HttpError::bad_request(err.body_text()))?;
            match name.as_str() {
                "titre" => form.titre = value,
                "contenu" => form.contenu = value,
                "resume" => form.resume = value,
                "categorie" => form.categorie = Some(value),
                "jour" => form.jour = Some(value),
                "tags" => form.tags = value,
                "publie" => form.publie = Some(value),
                other => tracing::debug!(field = other, "ignoring unknown article form field"),
            }
        }
        Ok(form)
    }
}

#[utoipa::path(
    get,
    path = "/admin",
    responses(
        (status = 200, description = "Dashboard counts and recent articles.", body = DashboardDto),
        (status = 303, description = "No admin session; redirect to the login page.")
    ),
    tag = "Admin"
)]
pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    Admin(admin): Admin,
) -> HttpResult<Json<DashboardDto>> {
    state
        .services
        .dashboard
        .dashboard(&admin)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/admin/articles",
    responses(
        (status = 200, description = "All articles, drafts included.", body = AdminArticleListDto),
        (status = 303, description = "No admin session; redirect to the login page.")
    ),
    tag = "Admin"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Admin(admin): Admin,
) -> HttpResult<Json<AdminArticleListDto>> {
    state
        .services
        .article_queries
        .list_all(&admin)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/admin/article/nouveau",
    responses((status = 200, description = "Empty editor.", body = ArticleEditorDto)),
    tag = "Admin"
)]
pub async fn new_article_form(
    Extension(state): Extension<HttpState>,
    Admin(admin): Admin,
) -> Json<ArticleEditorDto> {
    Json(state.services.article_queries.new_article_editor(&admin))
}

#[utoipa::path(
    post,
    path = "/admin/article/nouveau",
    request_body(content = ArticleForm, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Created; redirect to the article list."),
        (status = 400, description = "Invalid form.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Admin(admin): Admin,
    multipart: Multipart,
) -> HttpResult<Redirect> {
    let form = ArticleForm::from_multipart(multipart).await?;
    let command = CreateArticleCommand {
        title: form.titre,
        body: form.contenu,
        summary: form.resume,
        category: form.categorie,
        day: form.jour,
        tags: form.tags,
        publish: form.publie.is_some(),
        cover_image: form.image_couverture,
    };

    state
        .services
        .article_commands
        .create_article(&admin, command)
        .await
        .into_http()?;
    Ok(Redirect::to(ARTICLES_PATH))
}

#[utoipa::path(
    get,
    path = "/admin/article/{id}/modifier",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Editor filled with the article.", body = ArticleEditorDto),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn edit_article_form(
    Extension(state): Extension<HttpState>,
    Admin(admin): Admin,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleEditorDto>> {
    state
        .services
        .article_queries
        .get_for_edit(&admin, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/article/{id}/modifier",
    params(("id" = i64, Path, description = "Article id")),
    request_body(content = ArticleForm, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Updated; redirect to the article list."),
        (status = 400, description = "Invalid form.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Admin(admin): Admin,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> HttpResult<Redirect> {
    let form = ArticleForm::from_multipart(multipart).await?;
    let command = UpdateArticleCommand {
        id,
        title: form.titre,
        body: form.contenu,
        summary: form.resume,
        category: form.categorie,
        day: form.jour,
        tags: form.tags,
        publish: form.publie.is_some(),
        cover_image: form.image_couverture,
    };

    state
        .services
        .article_commands
        .update_article(&admin, command)
        .await
        .into_http()?;
    Ok(Redirect::to(ARTICLES_PATH))
}

#[utoipa::path(
    post,
    path = "/admin/article/{id}/supprimer",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 303, description = "Deleted; redirect to the article list."),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Admin(admin): Admin,
    Path(id): Path<i64>,
) -> HttpResult<Redirect> {
    state
        .services
        .article_commands
        .delete_article(&admin, DeleteArticleCommand { id })
        .await
        .into_http()?;
    Ok(Redirect::to(ARTICLES_PATH))
}
