// src/application/commands/media.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    application::{
        dto::{AdminContext, MediaDto, UploadedFile},
        error::{ApplicationError, ApplicationResult},
        ports::{storage::MediaStorage, time::Clock},
    },
    domain::media::{FileExtension, MediaId, MediaKind, MediaRepository, NewMedia, StoredFileName},
};

/// A file written to media storage under the upload naming scheme.
#[derive(Debug, Clone)]
pub(crate) struct StoredUpload {
    pub stored_name: StoredFileName,
    pub kind: MediaKind,
    pub size_bytes: i64,
}

/// Validate the extension, derive the stored name and write the bytes.
/// Shared by the media library and article cover images.
pub(crate) async fn persist_upload(
    storage: &dyn MediaStorage,
    file: UploadedFile,
    now: DateTime<Utc>,
) -> ApplicationResult<StoredUpload> {
    let extension = FileExtension::from_file_name(&file.file_name)
        .ok_or_else(|| ApplicationError::unsupported_file_type(file.file_name.clone()))?;
    let stored_name = StoredFileName::for_upload(&file.file_name, extension, now);

    let size = storage.save(stored_name.as_str(), file.bytes).await?;
    let size_bytes = i64::try_from(size)
        .map_err(|_| ApplicationError::infrastructure("stored file too large"))?;

    Ok(StoredUpload {
        stored_name,
        kind: extension.kind(),
        size_bytes,
    })
}

pub struct UploadMediaCommand {
    pub file: UploadedFile,
}

pub struct DeleteMediaCommand {
    pub id: i64,
}

pub struct MediaCommandService {
    repo: Arc<dyn MediaRepository>,
    storage: Arc<dyn MediaStorage>,
    clock: Arc<dyn Clock>,
}

impl MediaCommandService {
    pub fn new(
        repo: Arc<dyn MediaRepository>,
        storage: Arc<dyn MediaStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            storage,
            clock,
        }
    }

    /// Store the file and record it. `UnsupportedFileType` when the extension
    /// is missing or not accepted; nothing is written in that case.
    pub async fn upload_media(
        &self,
        actor: &AdminContext,
        command: UploadMediaCommand,
    ) -> ApplicationResult<MediaDto> {
        let now = self.clock.now();
        let original_name = command.file.file_name.clone();
        let stored = persist_upload(self.storage.as_ref(), command.file, now).await?;

        let media = self
            .repo
            .insert(NewMedia {
                stored_name: stored.stored_name,
                original_name,
                kind: stored.kind,
                size_bytes: stored.size_bytes,
                uploaded_at: now,
            })
            .await?;

        tracing::info!(
            admin = %actor.username,
            media_id = media.id.0,
            file = %media.stored_name,
            kind = %media.kind,
            size = media.size_bytes,
            "media uploaded"
        );
        Ok(media.into())
    }

    /// Remove the file, tolerating one that is already gone, then the record.
    pub async fn delete_media(
        &self,
        actor: &AdminContext,
        command: DeleteMediaCommand,
    ) -> ApplicationResult<()> {
        let id = MediaId::new(command.id)?;
        let media = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("media not found"))?;

        match self.storage.remove(media.stored_name.as_str()).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(file = %media.stored_name, "media file already missing");
            }
            Err(err) => {
                tracing::warn!(file = %media.stored_name, error = %err, "could not remove media file");
            }
        }

        self.repo.delete(id).await?;
        tracing::info!(admin = %actor.username, media_id = id.0, "media deleted");
        Ok(())
    }
}
