// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AdminContext, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use headers::{Cookie, HeaderMapExt};

use super::error::HttpError;

pub const SESSION_COOKIE: &str = "robotblog_session";
pub const LOGIN_PATH: &str = "/admin/login";

/// A request carrying a live admin session.
#[derive(Debug, Clone)]
pub struct Admin(pub AdminContext);

/// The admin session when there is one; never rejects on a missing cookie.
#[derive(Debug, Clone)]
pub struct MaybeAdmin(pub Option<AdminContext>);

pub enum AdminRejection {
    /// No usable session: send the browser to the login page.
    Login,
    Error(HttpError),
}

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Login => Redirect::to(LOGIN_PATH).into_response(),
            Self::Error(err) => err.into_response(),
        }
    }
}

fn session_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_string))
        .filter(|token| !token.is_empty())
}

async fn resolve_session<S>(parts: &mut Parts, state: &S) -> Result<Option<AdminContext>, HttpError>
where
    S: Send + Sync,
{
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::Infrastructure(
                "application state missing".into(),
            ))
        })?;

    let Some(token) = session_token(parts) else {
        return Ok(None);
    };

    app_state
        .services
        .auth
        .authenticate(&token)
        .await
        .map_err(HttpError::from_error)
}

impl<S> FromRequestParts<S> for Admin
where
    S: Send + Sync,
{
    type Rejection = AdminRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match resolve_session(parts, state).await {
            Ok(Some(context)) => Ok(Self(context)),
            Ok(None) => {
                tracing::debug!(path = %parts.uri.path(), "admin session required");
                Err(AdminRejection::Login)
            }
            Err(err) => Err(AdminRejection::Error(err)),
        }
    }
}

impl<S> FromRequestParts<S> for MaybeAdmin
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        resolve_session(parts, state).await.map(Self)
    }
}
