use crate::domain::article::{Article, Category};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{format::date_fr, pagination::PageDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub key: String,
    pub label: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            key: category.key().to_string(),
            label: category.label().to_string(),
        }
    }
}

impl CategoryDto {
    pub fn all() -> Vec<Self> {
        Category::ALL.into_iter().map(Into::into).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub category: CategoryDto,
    #[serde(default)]
    pub day: Option<i32>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_on: Option<String>,
    pub tags: Vec<String>,
    pub views: i64,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let tags = article.tag_list();
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            body: article.body,
            summary: article.summary,
            cover_image: article.cover_image,
            category: article.category.into(),
            day: article.day,
            published: article.published,
            created_at: article.created_at,
            published_at: article.published_at,
            published_on: article.published_at.map(date_fr),
            tags,
            views: article.views,
        }
    }
}

/// Listing card: everything but the body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub category: CategoryDto,
    #[serde(default)]
    pub day: Option<i32>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_on: Option<String>,
    pub tags: Vec<String>,
    pub views: i64,
}

impl From<Article> for ArticleSummaryDto {
    fn from(article: Article) -> Self {
        let tags = article.tag_list();
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            summary: article.summary,
            cover_image: article.cover_image,
            category: article.category.into(),
            day: article.day,
            published: article.published,
            created_at: article.created_at,
            published_at: article.published_at,
            published_on: article.published_at.map(date_fr),
            tags,
            views: article.views,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleLinkDto {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub day: Option<i32>,
}

impl From<Article> for ArticleLinkDto {
    fn from(article: Article) -> Self {
        Self {
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            day: article.day,
        }
    }
}

/// Single article page with its day-ordered neighbours.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleViewDto {
    pub article: ArticleDto,
    #[serde(default)]
    pub previous: Option<ArticleLinkDto>,
    #[serde(default)]
    pub next: Option<ArticleLinkDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomeDto {
    pub articles: Vec<ArticleSummaryDto>,
    pub max_day: i32,
    pub published_count: u64,
    pub categories: Vec<CategoryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryPageDto {
    pub category: CategoryDto,
    pub articles: PageDto<ArticleSummaryDto>,
    pub categories: Vec<CategoryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResultDto {
    pub query: String,
    pub articles: Vec<ArticleSummaryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminArticleListDto {
    pub articles: Vec<ArticleSummaryDto>,
    pub categories: Vec<CategoryDto>,
}

/// Context for the authoring form; `article` is absent on creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleEditorDto {
    #[serde(default)]
    pub article: Option<ArticleDto>,
    pub categories: Vec<CategoryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub article_count: u64,
    pub published_count: u64,
    pub media_count: u64,
    pub recent_articles: Vec<ArticleSummaryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AboutDto {
    pub max_day: i32,
    pub published_count: u64,
    pub categories: Vec<CategoryDto>,
}
