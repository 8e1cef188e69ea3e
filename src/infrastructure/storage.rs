use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::MediaStorage,
};
use async_trait::async_trait;
use bytes::Bytes;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Uploads kept as plain files in one directory, served back by the HTTP
/// layer under `/uploads`.
#[derive(Debug, Clone)]
pub struct LocalMediaStorage {
    root: PathBuf,
}

impl LocalMediaStorage {
    /// Create the upload directory if needed.
    pub async fn init(root: impl Into<PathBuf>) -> ApplicationResult<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("{}: {err}", root.display())))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, file_name: &str) -> ApplicationResult<PathBuf> {
        if file_name.is_empty()
            || file_name.contains(['/', '\\'])
            || file_name.starts_with('.')
        {
            return Err(ApplicationError::validation(format!(
                "invalid stored file name: {file_name}"
            )));
        }
        Ok(self.root.join(file_name))
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn save(&self, file_name: &str, bytes: Bytes) -> ApplicationResult<u64> {
        let path = self.path_for(file_name)?;
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("{}: {err}", path.display())))?;

        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("{}: {err}", path.display())))?;
        tracing::debug!(file = %path.display(), size = metadata.len(), "upload written");
        Ok(metadata.len())
    }

    async fn remove(&self, file_name: &str) -> ApplicationResult<bool> {
        let path = self.path_for(file_name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(ApplicationError::infrastructure(format!(
                "{}: {err}",
                path.display()
            ))),
        }
    }
}
