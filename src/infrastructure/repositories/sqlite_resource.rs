use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::resource::{NewResource, Resource, ResourceId, ResourceRepository};
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteResourceRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteResourceRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ResourceRow {
    id: i64,
    title: String,
    url: String,
    description: String,
    category: String,
    sort_order: i32,
}

impl TryFrom<ResourceRow> for Resource {
    type Error = DomainError;

    fn try_from(row: ResourceRow) -> Result<Self, Self::Error> {
        Ok(Resource {
            id: ResourceId::new(row.id)?,
            title: row.title,
            url: row.url,
            description: row.description,
            category: row.category,
            sort_order: row.sort_order,
        })
    }
}

#[async_trait]
impl ResourceRepository for SqliteResourceRepository {
    async fn insert(&self, resource: NewResource) -> DomainResult<Resource> {
        let row = sqlx::query_as::<_, ResourceRow>(
            "INSERT INTO resources (title, url, description, category, sort_order) VALUES (?, ?, ?, ?, ?) \
             RETURNING id, title, url, description, category, sort_order",
        )
        .bind(&resource.title)
        .bind(&resource.url)
        .bind(&resource.description)
        .bind(&resource.category)
        .bind(resource.sort_order)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Resource::try_from(row)
    }

    async fn find_by_id(&self, id: ResourceId) -> DomainResult<Option<Resource>> {
        let row = sqlx::query_as::<_, ResourceRow>(
            "SELECT id, title, url, description, category, sort_order FROM resources WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Resource::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Resource>> {
        let rows = sqlx::query_as::<_, ResourceRow>(
            "SELECT id, title, url, description, category, sort_order FROM resources ORDER BY category ASC, sort_order ASC, id ASC",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Resource::try_from).collect()
    }

    async fn delete(&self, id: ResourceId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM resources WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("resource not found"));
        }
        Ok(())
    }
}
