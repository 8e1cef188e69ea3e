pub mod entity;
pub mod repository;

pub use entity::{DEFAULT_ICON, NewTimelineEntry, TimelineEntry, TimelineEntryId, TimelineStatus};
pub use repository::TimelineRepository;
