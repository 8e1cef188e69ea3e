// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

/// Where uploaded files are persisted.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Write `bytes` under `file_name` and return the size of the file as
    /// stored, read back from the storage rather than taken from the input.
    async fn save(&self, file_name: &str, bytes: Bytes) -> ApplicationResult<u64>;
    /// Remove the file. Returns `false` when there was no such file.
    async fn remove(&self, file_name: &str) -> ApplicationResult<bool>;
}
