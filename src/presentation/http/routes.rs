// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin_articles, admin_media, admin_resources, admin_timeline, auth, public},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

/// Upper bound for request bodies, uploads included.
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

pub fn build_router(state: HttpState) -> Router {
    let uploads = ServeDir::new(&state.upload_dir);

    let public_routes = Router::new()
        .route("/", get(public::home))
        .route("/journal", get(public::journal))
        .route("/categorie/{category}", get(public::category))
        .route("/article/{slug}", get(public::article))
        .route("/timeline", get(public::timeline))
        .route("/ressources", get(public::resources))
        .route("/a-propos", get(public::about))
        .route("/recherche", get(public::search))
        .route("/health", get(health))
        .nest_service("/uploads", uploads);

    let admin_routes = Router::new()
        .route("/admin/login", get(auth::login_page).post(auth::login))
        .route("/admin/logout", get(auth::logout))
        .route("/admin", get(admin_articles::dashboard))
        .route("/admin/articles", get(admin_articles::list_articles))
        .route(
            "/admin/article/nouveau",
            get(admin_articles::new_article_form).post(admin_articles::create_article),
        )
        .route(
            "/admin/article/{id}/modifier",
            get(admin_articles::edit_article_form).post(admin_articles::update_article),
        )
        .route(
            "/admin/article/{id}/supprimer",
            post(admin_articles::delete_article),
        )
        .route(
            "/admin/medias",
            get(admin_media::library).post(admin_media::upload),
        )
        .route("/admin/medias/{id}/supprimer", post(admin_media::delete))
        .route(
            "/admin/timeline",
            get(admin_timeline::list).post(admin_timeline::create),
        )
        .route(
            "/admin/timeline/{id}/supprimer",
            post(admin_timeline::delete),
        )
        .route(
            "/admin/ressources",
            get(admin_resources::list).post(admin_resources::create),
        )
        .route(
            "/admin/ressources/{id}/supprimer",
            post(admin_resources::delete),
        );

    Router::new()
        .merge(openapi::docs_router())
        .merge(public_routes)
        .merge(admin_routes)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
