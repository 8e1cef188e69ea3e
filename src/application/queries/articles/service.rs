use std::sync::Arc;

use crate::domain::article::{ArticleReadRepository, ArticleWriteRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    // Reading an article bumps its view counter.
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        write_repo: Arc<dyn ArticleWriteRepository>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
        }
    }
}
