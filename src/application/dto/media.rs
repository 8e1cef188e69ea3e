use crate::domain::media::Media;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::format::file_size_label;

/// A file received from a multipart form, before validation.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MediaDto {
    pub id: i64,
    pub file_name: String,
    pub original_name: String,
    pub kind: String,
    pub size_bytes: i64,
    pub size_label: String,
    pub uploaded_at: DateTime<Utc>,
}

impl From<Media> for MediaDto {
    fn from(media: Media) -> Self {
        Self {
            id: media.id.into(),
            file_name: media.stored_name.as_str().to_string(),
            original_name: media.original_name,
            kind: media.kind.as_str().to_string(),
            size_bytes: media.size_bytes,
            size_label: file_size_label(media.size_bytes),
            uploaded_at: media.uploaded_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Danger,
}

/// One-shot message shown above an admin listing after a form submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Danger,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MediaLibraryDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    pub medias: Vec<MediaDto>,
}
