use super::ArticleQueryService;
use crate::{
    application::{
        dto::{
            AboutDto, ArticleDto, ArticleSummaryDto, ArticleViewDto, CategoryDto,
            CategoryPageDto, HomeDto, PageDto, SearchResultDto,
        },
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleNeighbours, ArticleSlug, Category},
        pagination::PageRequest,
    },
};

pub const HOME_ARTICLE_COUNT: u32 = 6;

pub struct SearchArticlesQuery {
    pub query: String,
}

impl ArticleQueryService {
    pub async fn home(&self) -> ApplicationResult<HomeDto> {
        let articles = self.read_repo.recent_published(HOME_ARTICLE_COUNT).await?;
        let stats = self.read_repo.published_stats().await?;
        Ok(HomeDto {
            articles: articles.into_iter().map(Into::into).collect(),
            max_day: stats.max_day,
            published_count: stats.count,
            categories: CategoryDto::all(),
        })
    }

    pub async fn about(&self) -> ApplicationResult<AboutDto> {
        let stats = self.read_repo.published_stats().await?;
        Ok(AboutDto {
            max_day: stats.max_day,
            published_count: stats.count,
            categories: CategoryDto::all(),
        })
    }

    /// Published articles by project day, newest first.
    pub async fn journal(&self, page: Option<u32>) -> ApplicationResult<PageDto<ArticleSummaryDto>> {
        let request = PageRequest::articles(page.unwrap_or(1));
        let (articles, total) = self.read_repo.list_published(request).await?;
        tracing::debug!(page = request.page(), total, "journal page");
        Ok(PageDto::new(
            articles.into_iter().map(Into::into).collect(),
            request,
            total,
        ))
    }

    pub async fn category(&self, key: &str, page: Option<u32>) -> ApplicationResult<CategoryPageDto> {
        let category: Category = key
            .parse()
            .map_err(|_| ApplicationError::not_found(format!("unknown category: {key}")))?;
        let request = PageRequest::articles(page.unwrap_or(1));
        let (articles, total) = self
            .read_repo
            .list_published_by_category(category, request)
            .await?;

        Ok(CategoryPageDto {
            category: category.into(),
            articles: PageDto::new(
                articles.into_iter().map(Into::into).collect::<Vec<ArticleSummaryDto>>(),
                request,
                total,
            ),
            categories: CategoryDto::all(),
        })
    }

    /// Public read of a published article. Counts one view, then resolves the
    /// previous and next articles by project day.
    pub async fn read_article(&self, slug: &str) -> ApplicationResult<ArticleViewDto> {
        let slug = ArticleSlug::new(slug)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let mut article = self
            .read_repo
            .find_published_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        article.views = self.write_repo.increment_views(article.id).await?;

        let ArticleNeighbours { previous, next } = match article.day {
            Some(day) => self.read_repo.neighbours(day).await?,
            None => ArticleNeighbours::default(),
        };

        Ok(ArticleViewDto {
            article: ArticleDto::from(article),
            previous: previous.map(Into::into),
            next: next.map(Into::into),
        })
    }

    /// Case-insensitive substring match over published titles, bodies and
    /// tags. A blank query matches nothing; any other query is matched as
    /// typed, surrounding spaces included.
    pub async fn search(&self, query: SearchArticlesQuery) -> ApplicationResult<SearchResultDto> {
        let SearchArticlesQuery { query } = query;
        if query.trim().is_empty() {
            return Ok(SearchResultDto {
                query,
                articles: Vec::new(),
            });
        }

        let articles = self.read_repo.search_published(&query).await?;
        tracing::debug!(query = %query, hits = articles.len(), "article search");
        Ok(SearchResultDto {
            query,
            articles: articles.into_iter().map(Into::into).collect(),
        })
    }
}
