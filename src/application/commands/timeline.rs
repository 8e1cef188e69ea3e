// src/application/commands/timeline.rs
use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    application::{
        dto::{AdminContext, TimelineEntryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::timeline::{
        DEFAULT_ICON, NewTimelineEntry, TimelineEntryId, TimelineRepository, TimelineStatus,
    },
};

/// Raw form values; every field may be missing or blank.
#[derive(Debug, Default)]
pub struct CreateTimelineEntryCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<String>,
    pub status: Option<String>,
    pub icon: Option<String>,
}

pub struct DeleteTimelineEntryCommand {
    pub id: i64,
}

pub struct TimelineCommandService {
    repo: Arc<dyn TimelineRepository>,
}

impl TimelineCommandService {
    pub fn new(repo: Arc<dyn TimelineRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_entry(
        &self,
        actor: &AdminContext,
        command: CreateTimelineEntryCommand,
    ) -> ApplicationResult<TimelineEntryDto> {
        let new_entry = NewTimelineEntry {
            title: command.title.unwrap_or_default(),
            description: command.description.unwrap_or_default(),
            event_date: parse_event_date(command.event_date.as_deref())?,
            status: parse_status(command.status.as_deref())?,
            icon: non_blank(command.icon).unwrap_or_else(|| DEFAULT_ICON.to_string()),
        };

        let entry = self.repo.insert(new_entry).await?;
        tracing::info!(admin = %actor.username, entry_id = entry.id.0, status = %entry.status, "timeline entry created");
        Ok(entry.into())
    }

    pub async fn delete_entry(
        &self,
        actor: &AdminContext,
        command: DeleteTimelineEntryCommand,
    ) -> ApplicationResult<()> {
        let id = TimelineEntryId::new(command.id)?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("timeline entry not found"));
        }
        self.repo.delete(id).await?;
        tracing::info!(admin = %actor.username, entry_id = id.0, "timeline entry deleted");
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_event_date(raw: Option<&str>) -> ApplicationResult<Option<NaiveDate>> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ApplicationError::validation(format!("invalid event date: {value}"))),
    }
}

fn parse_status(raw: Option<&str>) -> ApplicationResult<TimelineStatus> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(TimelineStatus::default()),
        Some(value) => Ok(value.parse()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_date_means_no_date() {
        assert_eq!(parse_event_date(None).unwrap(), None);
        assert_eq!(parse_event_date(Some("  ")).unwrap(), None);
        assert_eq!(
            parse_event_date(Some("2024-01-15")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn malformed_date_is_a_validation_error() {
        assert!(matches!(
            parse_event_date(Some("15/01/2024")),
            Err(ApplicationError::Validation(_))
        ));
    }

    #[test]
    fn status_defaults_to_planned() {
        assert_eq!(parse_status(None).unwrap(), TimelineStatus::Planned);
        assert_eq!(parse_status(Some("")).unwrap(), TimelineStatus::Planned);
        assert_eq!(parse_status(Some("complete")).unwrap(), TimelineStatus::Complete);
        assert!(parse_status(Some("bogus")).is_err());
    }
}
