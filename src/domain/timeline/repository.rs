use crate::domain::errors::DomainResult;
use crate::domain::timeline::entity::{NewTimelineEntry, TimelineEntry, TimelineEntryId};
use async_trait::async_trait;

#[async_trait]
pub trait TimelineRepository: Send + Sync {
    async fn insert(&self, entry: NewTimelineEntry) -> DomainResult<TimelineEntry>;
    async fn find_by_id(&self, id: TimelineEntryId) -> DomainResult<Option<TimelineEntry>>;
    /// Ordered by event date, oldest first.
    async fn list(&self) -> DomainResult<Vec<TimelineEntry>>;
    async fn delete(&self, id: TimelineEntryId) -> DomainResult<()>;
}
