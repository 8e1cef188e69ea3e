use std::sync::Arc;

use crate::{
    application::{
        dto::{AdminContext, MediaLibraryDto, Notice},
        error::ApplicationResult,
    },
    domain::media::MediaRepository,
};

pub struct MediaQueryService {
    repo: Arc<dyn MediaRepository>,
}

impl MediaQueryService {
    pub fn new(repo: Arc<dyn MediaRepository>) -> Self {
        Self { repo }
    }

    /// Library listing, most recent uploads first.
    pub async fn library(
        &self,
        _actor: &AdminContext,
        notice: Option<Notice>,
    ) -> ApplicationResult<MediaLibraryDto> {
        let medias = self.repo.list().await?;
        Ok(MediaLibraryDto {
            notice,
            medias: medias.into_iter().map(Into::into).collect(),
        })
    }
}
