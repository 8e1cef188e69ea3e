// src/application/commands/resources.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AdminContext, ResourceDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::resource::{NewResource, ResourceId, ResourceRepository},
};

pub const DEFAULT_RESOURCE_CATEGORY: &str = "outils";

#[derive(Debug, Default)]
pub struct CreateResourceCommand {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub sort_order: Option<String>,
}

pub struct DeleteResourceCommand {
    pub id: i64,
}

pub struct ResourceCommandService {
    repo: Arc<dyn ResourceRepository>,
}

impl ResourceCommandService {
    pub fn new(repo: Arc<dyn ResourceRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_resource(
        &self,
        actor: &AdminContext,
        command: CreateResourceCommand,
    ) -> ApplicationResult<ResourceDto> {
        let category = command
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_RESOURCE_CATEGORY.to_string());

        let new_resource = NewResource {
            title: command.title.unwrap_or_default(),
            url: command.url.unwrap_or_default(),
            description: command.description.unwrap_or_default(),
            category,
            sort_order: parse_sort_order(command.sort_order.as_deref())?,
        };

        let resource = self.repo.insert(new_resource).await?;
        tracing::info!(admin = %actor.username, resource_id = resource.id.0, category = %resource.category, "resource created");
        Ok(resource.into())
    }

    pub async fn delete_resource(
        &self,
        actor: &AdminContext,
        command: DeleteResourceCommand,
    ) -> ApplicationResult<()> {
        let id = ResourceId::new(command.id)?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("resource not found"));
        }
        self.repo.delete(id).await?;
        tracing::info!(admin = %actor.username, resource_id = id.0, "resource deleted");
        Ok(())
    }
}

fn parse_sort_order(raw: Option<&str>) -> ApplicationResult<i32> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(0),
        Some(value) => value
            .parse()
            .map_err(|_| ApplicationError::validation(format!("invalid sort order: {value}"))),
    }
}
