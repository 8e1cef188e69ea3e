// src/presentation/http/controllers/admin_media.rs
use crate::application::{
    commands::media::{DeleteMediaCommand, UploadMediaCommand},
    dto::{MediaLibraryDto, Notice, UploadedFile},
    error::ApplicationError,
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Admin;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path},
    response::Redirect,
};

const UPLOAD_FIELD: &str = "fichier";

async fn read_upload(mut multipart: Multipart) -> HttpResult<Option<UploadedFile>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::bad_request(err.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|err| HttpError::bad_request(err.body_text()))?;
        if file_name.is_empty() {
            return Ok(None);
        }
        return Ok(Some(UploadedFile { file_name, bytes }));
    }
    Ok(None)
}

#[utoipa::path(
    get,
    path = "/admin/medias",
    responses((status = 200, description = "Uploaded files, newest first.", body = MediaLibraryDto)),
    tag = "Admin"
)]
pub async fn library(
    Extension(state): Extension<HttpState>,
    Admin(admin): Admin,
) -> HttpResult<Json<MediaLibraryDto>> {
    state
        .services
        .media_queries
        .library(&admin, None)
        .await
        .into_http()
        .map(Json)
}

/// A refused or missing file is reported in the notice and the listing is
/// still returned.
#[utoipa::path(
    post,
    path = "/admin/medias",
    request_body(content_type = "multipart/form-data", description = "File in the `fichier` field."),
    responses(
        (status = 200, description = "Refreshed listing with an upload notice.", body = MediaLibraryDto),
        (status = 400, description = "Malformed multipart body.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn upload(
    Extension(state): Extension<HttpState>,
    Admin(admin): Admin,
    multipart: Multipart,
) -> HttpResult<Json<MediaLibraryDto>> {
    let notice = match read_upload(multipart).await? {
        None => Notice::danger("Aucun fichier sélectionné"),
        Some(file) => {
            let original = file.file_name.clone();
            match state
                .services
                .media_commands
                .upload_media(&admin, UploadMediaCommand { file })
                .await
            {
                Ok(_) => Notice::success(format!("Fichier \"{original}\" uploadé !")),
                Err(ApplicationError::UnsupportedFileType(name)) => {
                    tracing::info!(file = %name, "upload refused: unsupported file type");
                    Notice::danger(format!("Type de fichier non autorisé : {name}"))
                }
                Err(err) => return Err(HttpError::from_error(err)),
            }
        }
    };

    state
        .services
        .media_queries
        .library(&admin, Some(notice))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/medias/{id}/supprimer",
    params(("id" = i64, Path, description = "Media id")),
    responses(
        (status = 303, description = "Deleted; redirect to the media library."),
        (status = 404, description = "No such media.", body = ErrorResponse)
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
        .media_commands
        .delete_media(&admin, DeleteMediaCommand { id })
        .await
        .into_http()?;
    Ok(Redirect::to("/admin/medias"))
}
