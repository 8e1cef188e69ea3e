use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::timeline::{
    NewTimelineEntry, TimelineEntry, TimelineEntryId, TimelineRepository, TimelineStatus,
};
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteTimelineRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTimelineRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TimelineRow {
    id: i64,
    title: String,
    description: String,
    event_date: Option<NaiveDate>,
    status: String,
    icon: String,
}

impl TryFrom<TimelineRow> for TimelineEntry {
    type Error = DomainError;

    fn try_from(row: TimelineRow) -> Result<Self, Self::Error> {
        Ok(TimelineEntry {
            id: TimelineEntryId::new(row.id)?,
            title: row.title,
            description: row.description,
            event_date: row.event_date,
            status: row.status.parse::<TimelineStatus>()?,
            icon: row.icon,
        })
    }
}

#[async_trait]
impl TimelineRepository for SqliteTimelineRepository {
    async fn insert(&self, entry: NewTimelineEntry) -> DomainResult<TimelineEntry> {
        let row = sqlx::query_as::<_, TimelineRow>(
            "INSERT INTO timeline_entries (title, description, event_date, status, icon) VALUES (?, ?, ?, ?, ?) \
             RETURNING id, title, description, event_date, status, icon",
        )
        .bind(&entry.title)
        .bind(&entry.description)
        .bind(entry.event_date)
        .bind(entry.status.as_str())
        .bind(&entry.icon)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        TimelineEntry::try_from(row)
    }

    async fn find_by_id(&self, id: TimelineEntryId) -> DomainResult<Option<TimelineEntry>> {
        let row = sqlx::query_as::<_, TimelineRow>(
            "SELECT id, title, description, event_date, status, icon FROM timeline_entries WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(TimelineEntry::try_from).transpose()
    }

    /// Undated entries sort first, as SQLite orders NULL lowest.
    async fn list(&self) -> DomainResult<Vec<TimelineEntry>> {
        let rows = sqlx::query_as::<_, TimelineRow>(
            "SELECT id, title, description, event_date, status, icon FROM timeline_entries ORDER BY event_date ASC, id ASC",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(TimelineEntry::try_from).collect()
    }

    async fn delete(&self, id: TimelineEntryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM timeline_entries WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("timeline entry not found"));
        }
        Ok(())
    }
}
