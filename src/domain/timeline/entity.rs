use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use std::{fmt, str::FromStr};

pub const DEFAULT_ICON: &str = "🔧";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimelineEntryId(pub i64);

impl TimelineEntryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "timeline entry id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TimelineEntryId> for i64 {
    fn from(value: TimelineEntryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimelineStatus {
    Complete,
    InProgress,
    #[default]
    Planned,
}

impl TimelineStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
        }
    }
}

impl FromStr for TimelineStatus {
    type Err = DomainError;

    /// Accepts the French keys of the existing admin forms as well.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "complete" => Ok(Self::Complete),
            "in-progress" | "en-cours" => Ok(Self::InProgress),
            "planned" | "planifie" => Ok(Self::Planned),
            other => Err(DomainError::Validation(format!(
                "unknown timeline status: {other}"
            ))),
        }
    }
}

impl fmt::Display for TimelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct TimelineEntry {
    pub id: TimelineEntryId,
    pub title: String,
    pub description: String,
    pub event_date: Option<NaiveDate>,
    pub status: TimelineStatus,
    pub icon: String,
}

#[derive(Debug, Clone)]
pub struct NewTimelineEntry {
    pub title: String,
    pub description: String,
    pub event_date: Option<NaiveDate>,
    pub status: TimelineStatus,
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::TimelineStatus;

    #[test]
    fn status_accepts_english_and_french_keys() {
        assert_eq!("complete".parse::<TimelineStatus>().unwrap(), TimelineStatus::Complete);
        assert_eq!("en-cours".parse::<TimelineStatus>().unwrap(), TimelineStatus::InProgress);
        assert_eq!("planifie".parse::<TimelineStatus>().unwrap(), TimelineStatus::Planned);
        assert!("done".parse::<TimelineStatus>().is_err());
    }
}
