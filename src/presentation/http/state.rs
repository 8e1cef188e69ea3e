// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Directory served under `/uploads`.
    pub upload_dir: PathBuf,
}
