use crate::domain::article::entity::{
    Article, ArticleNeighbours, ArticleUpdate, NewArticle, PublishedStats,
};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, Category};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    /// Add one to the view counter and return the new value.
    async fn increment_views(&self, id: ArticleId) -> DomainResult<i64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Lookup regardless of publication state; used for slug allocation.
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn find_published_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Published articles by project day, then publication time, newest first.
    async fn list_published(&self, page: PageRequest) -> DomainResult<(Vec<Article>, u64)>;
    async fn list_published_by_category(
        &self,
        category: Category,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)>;
    async fn neighbours(&self, day: i32) -> DomainResult<ArticleNeighbours>;
    async fn recent_published(&self, limit: u32) -> DomainResult<Vec<Article>>;
    async fn published_stats(&self) -> DomainResult<PublishedStats>;
    async fn search_published(&self, query: &str) -> DomainResult<Vec<Article>>;
    /// Every article, drafts included, most recently created first.
    async fn list_all(&self) -> DomainResult<Vec<Article>>;
    async fn recent_created(&self, limit: u32) -> DomainResult<Vec<Article>>;
    async fn count_all(&self) -> DomainResult<u64>;
}
