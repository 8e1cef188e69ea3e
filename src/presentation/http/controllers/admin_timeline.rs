// src/presentation/http/controllers/admin_timeline.rs
use crate::application::{
    commands::timeline::{CreateTimelineEntryCommand, DeleteTimelineEntryCommand},
    dto::{Notice, TimelineDto},
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
pub struct TimelineForm {
    pub titre: Option<String>,
    pub description: Option<String>,
    /// `YYYY-MM-DD`, may be blank.
    pub date_event: Option<String>,
    /// complete, in-progress (en-cours) or planned (planifie).
    pub statut: Option<String>,
    pub icone: Option<String>,
}

#[utoipa::path(
    get,
    path = "/admin/timeline",
    responses((status = 200, description = "Milestones by date.", body = TimelineDto)),
    tag = "Admin"
)]
pub async fn list(
    Extension(state): Extension<HttpState>,
    Admin(_admin): Admin,
) -> HttpResult<Json<TimelineDto>> {
    state
        .services
        .timeline_queries
        .timeline(None)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/timeline",
    request_body(content = TimelineForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Refreshed listing with a notice.", body = TimelineDto),
        (status = 400, description = "Invalid date or status.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn create(
    Extension(state): Extension<HttpState>,
    Admin(admin): Admin,
    Form(form): Form<TimelineForm>,
) -> HttpResult<Json<TimelineDto>> {
    let command = CreateTimelineEntryCommand {
        title: form.titre,
        description: form.description,
        event_date: form.date_event,
        status: form.statut,
        icon: form.icone,
    };
    state
        .services
        .timeline_commands
        .create_entry(&admin, command)
        .await
        .into_http()?;

    state
        .services
        .timeline_queries
        .timeline(Some(Notice::success("Étape ajoutée !")))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/timeline/{id}/supprimer",
    params(("id" = i64, Path, description = "Timeline entry id")),
    responses(
        (status = 303, description = "Deleted; redirect to the timeline admin."),
        (status = 404, description = "No such entry.", body = ErrorResponse)
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
        .timeline_commands
        .delete_entry(&admin, DeleteTimelineEntryCommand { id })
        .await
        .into_http()?;
    Ok(Redirect::to("/admin/timeline"))
}
