use crate::domain::errors::DomainResult;
use crate::domain::resource::entity::{NewResource, Resource, ResourceId};
use async_trait::async_trait;

#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn insert(&self, resource: NewResource) -> DomainResult<Resource>;
    async fn find_by_id(&self, id: ResourceId) -> DomainResult<Option<Resource>>;
    /// Ordered by category, then sort order.
    async fn list(&self) -> DomainResult<Vec<Resource>>;
    async fn delete(&self, id: ResourceId) -> DomainResult<()>;
}
