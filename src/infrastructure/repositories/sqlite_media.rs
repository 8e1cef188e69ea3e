use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::{Media, MediaId, MediaKind, MediaRepository, NewMedia, StoredFileName};
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteMediaRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMediaRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MediaRow {
    id: i64,
    file_name: String,
    original_name: String,
    kind: String,
    size_bytes: i64,
    uploaded_at: DateTime<Utc>,
}

impl TryFrom<MediaRow> for Media {
    type Error = DomainError;

    fn try_from(row: MediaRow) -> Result<Self, Self::Error> {
        Ok(Media {
            id: MediaId::new(row.id)?,
            stored_name: StoredFileName::new(row.file_name)?,
            original_name: row.original_name,
            kind: row.kind.parse::<MediaKind>()?,
            size_bytes: row.size_bytes,
            uploaded_at: row.uploaded_at,
        })
    }
}

#[async_trait]
impl MediaRepository for SqliteMediaRepository {
    async fn insert(&self, media: NewMedia) -> DomainResult<Media> {
        let row = sqlx::query_as::<_, MediaRow>(
            "INSERT INTO media (file_name, original_name, kind, size_bytes, uploaded_at) VALUES (?, ?, ?, ?, ?) \
             RETURNING id, file_name, original_name, kind, size_bytes, uploaded_at",
        )
        .bind(media.stored_name.as_str())
        .bind(&media.original_name)
        .bind(media.kind.as_str())
        .bind(media.size_bytes)
        .bind(media.uploaded_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Media::try_from(row)
    }

    async fn find_by_id(&self, id: MediaId) -> DomainResult<Option<Media>> {
        let row = sqlx::query_as::<_, MediaRow>(
            "SELECT id, file_name, original_name, kind, size_bytes, uploaded_at FROM media WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Media::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Media>> {
        let rows = sqlx::query_as::<_, MediaRow>(
            "SELECT id, file_name, original_name, kind, size_bytes, uploaded_at FROM media ORDER BY uploaded_at DESC, id DESC",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Media::try_from).collect()
    }

    async fn delete(&self, id: MediaId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM media WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("media not found"));
        }
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM media")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }
}
