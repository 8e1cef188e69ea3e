use std::sync::Arc;

use crate::{
    application::{
        dto::{Notice, TimelineDto},
        error::ApplicationResult,
    },
    domain::timeline::TimelineRepository,
};

pub struct TimelineQueryService {
    repo: Arc<dyn TimelineRepository>,
}

impl TimelineQueryService {
    pub fn new(repo: Arc<dyn TimelineRepository>) -> Self {
        Self { repo }
    }

    /// Milestones by event date, oldest first. Shared by the public page and
    /// the admin listing, which adds a notice after a form submission.
    pub async fn timeline(&self, notice: Option<Notice>) -> ApplicationResult<TimelineDto> {
        let entries = self.repo.list().await?;
        Ok(TimelineDto {
            notice,
            entries: entries.into_iter().map(Into::into).collect(),
        })
    }
}
