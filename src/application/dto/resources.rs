use crate::domain::resource::{Resource, ResourceGroup};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::media::Notice;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResourceDto {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: String,
    pub sort_order: i32,
}

impl From<Resource> for ResourceDto {
    fn from(resource: Resource) -> Self {
        Self {
            id: resource.id.into(),
            title: resource.title,
            url: resource.url,
            description: resource.description,
            category: resource.category,
            sort_order: resource.sort_order,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResourceGroupDto {
    pub category: String,
    pub resources: Vec<ResourceDto>,
}

impl From<ResourceGroup> for ResourceGroupDto {
    fn from(group: ResourceGroup) -> Self {
        Self {
            category: group.category,
            resources: group.resources.into_iter().map(Into::into).collect(),
        }
    }
}

/// Flat admin listing, in (category, sort order) order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResourceListDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    pub resources: Vec<ResourceDto>,
}

/// Public listing: resources grouped by category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResourceGroupsDto {
    pub groups: Vec<ResourceGroupDto>,
}
