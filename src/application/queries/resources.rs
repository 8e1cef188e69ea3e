use std::sync::Arc;

use crate::{
    application::{
        dto::{AdminContext, Notice, ResourceGroupsDto, ResourceListDto},
        error::ApplicationResult,
    },
    domain::resource::{ResourceRepository, group_by_category},
};

pub struct ResourceQueryService {
    repo: Arc<dyn ResourceRepository>,
}

impl ResourceQueryService {
    pub fn new(repo: Arc<dyn ResourceRepository>) -> Self {
        Self { repo }
    }

    /// Public page: one group per category, in first-seen order.
    pub async fn grouped(&self) -> ApplicationResult<ResourceGroupsDto> {
        let resources = self.repo.list().await?;
        Ok(ResourceGroupsDto {
            groups: group_by_category(resources)
                .into_iter()
                .map(Into::into)
                .collect(),
        })
    }

    pub async fn admin_list(
        &self,
        _actor: &AdminContext,
        notice: Option<Notice>,
    ) -> ApplicationResult<ResourceListDto> {
        let resources = self.repo.list().await?;
        Ok(ResourceListDto {
            notice,
            resources: resources.into_iter().map(Into::into).collect(),
        })
    }
}
