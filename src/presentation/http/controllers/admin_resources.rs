// src/presentation/http/controllers/admin_resources.rs
use crate::application::{
    commands::resources::{CreateResourceCommand, DeleteResourceCommand},
    dto::{Notice, ResourceListDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Admin;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form, Json,
    extract::Path,
    response::Redirect,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ResourceForm {
    pub titre: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    /// Grouping key; `outils` when left blank.
    pub categorie: Option<String>,
    /// Integer sort order within the category; 0 when left blank.
    pub ordre: Option<String>,
}

#[utoipa::path(
    get,
    path = "/admin/ressources",
    responses((status = 200, description = "Resources by category and sort order.", body = ResourceListDto)),
    tag = "Admin"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
    Admin(admin): Admin,
) -> HttpResult<Json<ResourceListDto>> {
    state
        .services
        .resource_queries
        .admin_list(&admin, None)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/ressources",
    request_body(content = ResourceForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Refreshed listing with a notice.", body = ResourceListDto),
        (status = 400, description = "Invalid sort order.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    Admin(admin): Admin,
    Form(form): Form<ResourceForm>,
) -> HttpResult<Json<ResourceListDto>> {
    let command = CreateResourceCommand {
        title: form.titre,
        url: form.url,
        description: form.description,
        category: form.categorie,
        sort_order: form.ordre,
    };
    state
        .services
        .resource_commands
        .create_resource(&admin, command)
        .await
        .into_http()?;

    state
        .services
        .resource_queries
        .admin_list(&admin, Some(Notice::success("Ressource ajoutée !")))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/ressources/{id}/supprimer",
    params(("id" = i64, Path, description = "Resource id")),
    responses(
        (status = 303, description = "Deleted; redirect to the resources admin."),
        (status = 404, description = "No such resource.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn delete(
    Extension(state): Extension<HttpState>,
    Admin(admin): Admin,
    Path(id): Path<i64>,
) -> HttpResult<Redirect> {
    state
        .services
        .resource_commands
        .delete_resource(&admin, DeleteResourceCommand { id })
        .await
        .into_http()?;
    Ok(Redirect::to("/admin/ressources"))
}
