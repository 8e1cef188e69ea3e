use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaId(pub i64);

impl MediaId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("media id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<MediaId> for i64 {
    fn from(value: MediaId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Pdf,
}

impl MediaKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Pdf => "pdf",
        }
    }
}

impl FromStr for MediaKind {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "pdf" => Ok(Self::Pdf),
            other => Err(DomainError::Validation(format!("unknown media kind: {other}"))),
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower-cased extension of an upload, restricted to the accepted formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileExtension(&'static str);

impl FileExtension {
    const ALLOWED: [&'static str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "mp4", "pdf"];

    /// Extension after the last dot, compared case-insensitively. `None` when
    /// the name has no dot or the extension is not accepted.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        let ext = ext.to_ascii_lowercase();
        Self::ALLOWED
            .into_iter()
            .find(|allowed| *allowed == ext)
            .map(Self)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Classification is by extension only; file contents are never inspected.
    pub fn kind(self) -> MediaKind {
        match self.0 {
            "mp4" => MediaKind::Video,
            "pdf" => MediaKind::Pdf,
            _ => MediaKind::Image,
        }
    }
}

/// Name under which an upload is written: `YYYYMMDDHHMMSS_<sanitized name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFileName(String);

impl StoredFileName {
    pub fn for_upload(
        original_name: &str,
        extension: FileExtension,
        uploaded_at: DateTime<Utc>,
    ) -> Self {
        let sanitized = sanitize_file_name(original_name);
        let suffix = format!(".{}", extension.as_str());
        let keeps_extension = sanitized.len() > suffix.len()
            && sanitized.to_ascii_lowercase().ends_with(&suffix);
        let base = if keeps_extension {
            sanitized
        } else {
            format!("upload{suffix}")
        };
        Self(format!("{}_{base}", uploaded_at.format("%Y%m%d%H%M%S")))
    }

    /// Wrap a name read back from storage. Path separators are refused so a
    /// stored name can never point outside the upload directory.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() || value.contains(['/', '\\']) || value.starts_with('.') {
            return Err(DomainError::Validation(format!(
                "invalid stored file name: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoredFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reduce an uploaded file name to `[A-Za-z0-9_.-]`. The name is NFKD
/// decomposed and whatever is still non-ASCII is dropped, so `ñ` keeps its
/// base letter and `ﬁ` becomes `fi`. Path separators and whitespace become
/// `_`, and leading or trailing dots and underscores are trimmed.
pub fn sanitize_file_name(name: &str) -> String {
    let spaced: String = name
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    spaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect::<String>()
        .trim_matches(['.', '_'])
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap()
    }

    #[test]
    fn extension_is_case_insensitive() {
        let ext = FileExtension::from_file_name("photo.PNG").unwrap();
        assert_eq!(ext.as_str(), "png");
        assert_eq!(ext.kind(), MediaKind::Image);
        assert_eq!(
            FileExtension::from_file_name("clip.mp4").unwrap().kind(),
            MediaKind::Video
        );
        assert_eq!(
            FileExtension::from_file_name("plan.pdf").unwrap().kind(),
            MediaKind::Pdf
        );
    }

    #[test]
    fn unsupported_or_missing_extensions_are_refused() {
        assert!(FileExtension::from_file_name("photo.exe").is_none());
        assert!(FileExtension::from_file_name("README").is_none());
        assert!(FileExtension::from_file_name("archive.png.zip").is_none());
    }

    #[test]
    fn sanitize_strips_paths_and_unsafe_characters() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_file_name("Schéma moteur (v2).png"), "Schema_moteur_v2.png");
        assert_eq!(sanitize_file_name("C:\\Users\\me\\photo.jpg"), "C_Users_me_photo.jpg");
    }

    #[test]
    fn sanitize_decomposes_any_accent_and_compatibility_form() {
        assert_eq!(sanitize_file_name("niño.png"), "nino.png");
        assert_eq!(sanitize_file_name("ﬁchier.png"), "fichier.png");
        assert_eq!(sanitize_file_name("Ångström_Ⅻ.jpg"), "Angstrom_XII.jpg");
        // No decomposition exists for these, so they are dropped.
        assert_eq!(sanitize_file_name("Ærø.png"), "r.png");
    }

    #[test]
    fn stored_name_is_timestamp_prefixed() {
        let ext = FileExtension::from_file_name("Photo robot.PNG").unwrap();
        let stored = StoredFileName::for_upload("Photo robot.PNG", ext, at());
        assert_eq!(stored.as_str(), "20240305140709_Photo_robot.PNG");
    }

    #[test]
    fn stored_name_falls_back_when_nothing_survives() {
        let ext = FileExtension::from_file_name("日本.png").unwrap();
        let stored = StoredFileName::for_upload("日本.png", ext, at());
        assert_eq!(stored.as_str(), "20240305140709_upload.png");
    }

    #[test]
    fn stored_name_rejects_separators() {
        assert!(StoredFileName::new("../x.png").is_err());
        assert!(StoredFileName::new("20240305140709_x.png").is_ok());
    }
}
