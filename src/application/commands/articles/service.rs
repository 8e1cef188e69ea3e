// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::media::persist_upload,
        dto::UploadedFile,
        error::{ApplicationError, ApplicationResult},
        ports::{storage::MediaStorage, time::Clock},
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) storage: Arc<dyn MediaStorage>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        slug_service: Arc<ArticleSlugService>,
        storage: Arc<dyn MediaStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            storage,
            clock,
        }
    }

    /// Save an optional cover image with the upload naming scheme. No media
    /// record is created, and a file with a refused extension is ignored.
    pub(super) async fn store_cover(
        &self,
        cover: Option<UploadedFile>,
    ) -> ApplicationResult<Option<String>> {
        let Some(file) = cover.filter(|file| !file.file_name.is_empty()) else {
            return Ok(None);
        };

        match persist_upload(self.storage.as_ref(), file, self.clock.now()).await {
            Ok(stored) => Ok(Some(stored.stored_name.as_str().to_string())),
            Err(ApplicationError::UnsupportedFileType(name)) => {
                tracing::debug!(file = %name, "ignoring cover image with unsupported type");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
