use crate::domain::timeline::TimelineEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::media::Notice;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimelineEntryDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    pub status: String,
    pub icon: String,
}

impl From<TimelineEntry> for TimelineEntryDto {
    fn from(entry: TimelineEntry) -> Self {
        Self {
            id: entry.id.into(),
            title: entry.title,
            description: entry.description,
            event_date: entry.event_date,
            status: entry.status.as_str().to_string(),
            icon: entry.icon,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimelineDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    pub entries: Vec<TimelineEntryDto>,
}
