use std::sync::Arc;

use crate::{
    application::{
        dto::{AdminContext, DashboardDto},
        error::ApplicationResult,
    },
    domain::{article::ArticleReadRepository, media::MediaRepository},
};

pub const DASHBOARD_RECENT_COUNT: u32 = 5;

pub struct DashboardQueryService {
    article_repo: Arc<dyn ArticleReadRepository>,
    media_repo: Arc<dyn MediaRepository>,
}

impl DashboardQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        media_repo: Arc<dyn MediaRepository>,
    ) -> Self {
        Self {
            article_repo,
            media_repo,
        }
    }

    pub async fn dashboard(&self, _actor: &AdminContext) -> ApplicationResult<DashboardDto> {
        let article_count = self.article_repo.count_all().await?;
        let published_count = self.article_repo.published_stats().await?.count;
        let media_count = self.media_repo.count().await?;
        let recent = self.article_repo.recent_created(DASHBOARD_RECENT_COUNT).await?;

        Ok(DashboardDto {
            article_count,
            published_count,
            media_count,
            recent_articles: recent.into_iter().map(Into::into).collect(),
        })
    }
}
