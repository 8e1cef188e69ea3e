// src/presentation/http/controllers/auth.rs
use crate::application::commands::auth::LoginCommand;
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{MaybeAdmin, SESSION_COOKIE};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form, Json,
    http::{HeaderValue, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginPageDto {
    pub authenticated: bool,
}

fn session_cookie(token: &str, max_age_secs: i64) -> HttpResult<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}"
    ))
    .map_err(|_| HttpError::bad_request("session token is not a valid cookie value"))
}

fn cleared_cookie() -> HeaderValue {
    HeaderValue::from_static("robotblog_session=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

#[utoipa::path(
    get,
    path = "/admin/login",
    responses((status = 200, description = "Login form context.", body = LoginPageDto)),
    tag = "Auth"
)]
pub async fn login_page(MaybeAdmin(admin): MaybeAdmin) -> Json<LoginPageDto> {
    Json(LoginPageDto {
        authenticated: admin.is_some(),
    })
}

#[utoipa::path(
    post,
    path = "/admin/login",
    request_body(content = LoginRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Logged in; session cookie set, redirect to the dashboard."),
        (status = 401, description = "Invalid credentials.", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Form(payload): Form<LoginRequest>,
) -> HttpResult<Response> {
    let auth = &state.services.auth;
    let result = auth
        .login(LoginCommand {
            username: payload.username,
            password: payload.password,
        })
        .await
        .into_http()?;

    let cookie = session_cookie(&result.token, auth.session_ttl().num_seconds())?;
    Ok(([(SET_COOKIE, cookie)], Redirect::to("/admin")).into_response())
}

#[utoipa::path(
    get,
    path = "/admin/logout",
    responses((status = 303, description = "Session destroyed, cookie cleared, redirect to the home page.")),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    MaybeAdmin(admin): MaybeAdmin,
) -> HttpResult<Response> {
    if let Some(admin) = admin {
        state.services.auth.logout(&admin).await.into_http()?;
    }
    Ok(([(SET_COOKIE, cleared_cookie())], Redirect::to("/")).into_response())
}
