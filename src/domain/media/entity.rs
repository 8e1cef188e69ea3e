use crate::domain::media::value_objects::{MediaId, MediaKind, StoredFileName};
use chrono::{DateTime, Utc};

/// Metadata of an uploaded file. The bytes live in the media storage under
/// `stored_name`.
#[derive(Debug, Clone)]
pub struct Media {
    pub id: MediaId,
    pub stored_name: StoredFileName,
    pub original_name: String,
    pub kind: MediaKind,
    pub size_bytes: i64,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMedia {
    pub stored_name: StoredFileName,
    pub original_name: String,
    pub kind: MediaKind,
    pub size_bytes: i64,
    pub uploaded_at: DateTime<Utc>,
}
