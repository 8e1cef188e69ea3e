use crate::domain::errors::DomainResult;
use crate::domain::media::entity::{Media, NewMedia};
use crate::domain::media::value_objects::MediaId;
use async_trait::async_trait;

#[async_trait]
pub trait MediaRepository: Send + Sync {
    async fn insert(&self, media: NewMedia) -> DomainResult<Media>;
    async fn find_by_id(&self, id: MediaId) -> DomainResult<Option<Media>>;
    /// Most recent uploads first.
    async fn list(&self) -> DomainResult<Vec<Media>>;
    async fn delete(&self, id: MediaId) -> DomainResult<()>;
    async fn count(&self) -> DomainResult<u64>;
}
