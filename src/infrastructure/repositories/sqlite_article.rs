use crate::domain::article::{
    Article, ArticleId, ArticleNeighbours, ArticleReadRepository, ArticleSlug, ArticleTitle,
    ArticleUpdate, ArticleWriteRepository, Category, NewArticle, PublishedStats, Tags,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const ARTICLE_COLUMNS: &str = "id, title, slug, body, summary, cover_image, category, day, published, created_at, published_at, tags, views";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    body: String,
    summary: Option<String>,
    cover_image: Option<String>,
    category: String,
    day: Option<i64>,
    published: i64,
    created_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
    tags: String,
    views: i64,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let day = row
            .day
            .map(i32::try_from)
            .transpose()
            .map_err(|_| DomainError::Persistence(format!("article {} has an out of range day", row.id)))?;

        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            body: row.body,
            summary: row.summary,
            cover_image: row.cover_image,
            category: row.category.parse::<Category>()?,
            day,
            published: row.published != 0,
            created_at: row.created_at,
            published_at: row.published_at,
            tags: Tags::new(row.tags),
            views: row.views,
        })
    }
}

fn into_articles(rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    rows.into_iter().map(Article::try_from).collect()
}

/// Escape LIKE wildcards so the query is matched literally.
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn to_count(total: i64) -> u64 {
    u64::try_from(total).unwrap_or_default()
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            body,
            summary,
            cover_image,
            category,
            day,
            tags,
            published,
            published_at,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, slug, body, summary, cover_image, category, day, published, created_at, published_at, tags, views) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0) RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(body)
        .bind(summary)
        .bind(cover_image)
        .bind(category.key())
        .bind(day)
        .bind(i64::from(published))
        .bind(created_at)
        .bind(published_at)
        .bind(tags.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            body,
            summary,
            cover_image,
            category,
            day,
            tags,
            published,
            published_at,
        } = update;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET title = ?, body = ?, summary = ?, cover_image = ?, category = ?, day = ?, tags = ?, published = ?, published_at = ? \
             WHERE id = ? RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(body)
        .bind(summary)
        .bind(cover_image)
        .bind(category.key())
        .bind(day)
        .bind(tags.as_str())
        .bind(i64::from(published))
        .bind(published_at)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("article not found"))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("article not found"));
        }
        Ok(())
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<i64> {
        sqlx::query_scalar::<_, i64>("UPDATE articles SET views = views + 1 WHERE id = ? RETURNING views")
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("article not found"))
    }
}

impl SqliteArticleReadRepository {
    async fn fetch_one_where(&self, clause: &str, value: &str) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE {clause}"
        ))
        .bind(value)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn paginate(
        &self,
        category: Option<Category>,
        order_by: &str,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)> {
        fn apply_conditions(builder: &mut QueryBuilder<'_, Sqlite>, category: Option<Category>) {
            builder.push(" WHERE published = 1");
            if let Some(category) = category {
                builder.push(" AND category = ");
                builder.push_bind(category.key());
            }
        }

        let mut list_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        apply_conditions(&mut list_builder, category);
        list_builder.push(" ORDER BY ");
        list_builder.push(order_by);
        list_builder.push(" LIMIT ");
        list_builder.push_bind(page.limit());
        list_builder.push(" OFFSET ");
        list_builder.push_bind(page.offset());

        let rows = list_builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) as count FROM articles");
        apply_conditions(&mut count_builder, category);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok((into_articles(rows)?, to_count(total)))
    }

    async fn fetch_list(&self, sql: &str, limit: Option<u32>) -> DomainResult<Vec<Article>> {
        let mut query = sqlx::query_as::<_, ArticleRow>(sql);
        if let Some(limit) = limit {
            query = query.bind(i64::from(limit));
        }
        let rows = query.fetch_all(&*self.pool).await.map_err(map_sqlx)?;
        into_articles(rows)
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        self.fetch_one_where("slug = ?", slug.as_str()).await
    }

    async fn find_published_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        self.fetch_one_where("slug = ? AND published = 1", slug.as_str())
            .await
    }

    async fn list_published(&self, page: PageRequest) -> DomainResult<(Vec<Article>, u64)> {
        self.paginate(None, "day DESC, published_at DESC, id DESC", page)
            .await
    }

    async fn list_published_by_category(
        &self,
        category: Category,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)> {
        self.paginate(Some(category), "published_at DESC, id DESC", page)
            .await
    }

    async fn neighbours(&self, day: i32) -> DomainResult<ArticleNeighbours> {
        let previous = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE published = 1 AND day IS NOT NULL AND day < ? \
             ORDER BY day DESC, published_at DESC LIMIT 1"
        ))
        .bind(day)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let next = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE published = 1 AND day IS NOT NULL AND day > ? \
             ORDER BY day ASC, published_at ASC LIMIT 1"
        ))
        .bind(day)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(ArticleNeighbours {
            previous: previous.map(Article::try_from).transpose()?,
            next: next.map(Article::try_from).transpose()?,
        })
    }

    async fn recent_published(&self, limit: u32) -> DomainResult<Vec<Article>> {
        self.fetch_list(
            &format!(
                "SELECT {ARTICLE_COLUMNS} FROM articles WHERE published = 1 ORDER BY published_at DESC, id DESC LIMIT ?"
            ),
            Some(limit),
        )
        .await
    }

    async fn published_stats(&self) -> DomainResult<PublishedStats> {
        let (max_day, count): (Option<i64>, i64) = sqlx::query_as(
            "SELECT MAX(day), COUNT(1) FROM articles WHERE published = 1",
        )
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(PublishedStats {
            max_day: max_day
                .and_then(|day| i32::try_from(day).ok())
                .unwrap_or(0),
            count: to_count(count),
        })
    }

    async fn search_published(&self, query: &str) -> DomainResult<Vec<Article>> {
        let pattern = like_pattern(query);
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE published = 1 AND \
             (title LIKE ?1 ESCAPE '\\' OR body LIKE ?1 ESCAPE '\\' OR tags LIKE ?1 ESCAPE '\\') \
             ORDER BY published_at DESC, id DESC"
        ))
        .bind(pattern)
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        into_articles(rows)
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        self.fetch_list(
            &format!("SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at DESC, id DESC"),
            None,
        )
        .await
    }

    async fn recent_created(&self, limit: u32) -> DomainResult<Vec<Article>> {
        self.fetch_list(
            &format!(
                "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at DESC, id DESC LIMIT ?"
            ),
            Some(limit),
        )
        .await
    }

    async fn count_all(&self) -> DomainResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM articles")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(to_count(total))
    }
}
