// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service responsible for producing unique slugs for articles.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// First free slug among `base`, `base-1`, `base-2`, ... checked in that
    /// order. Titles with no letter or digit left after slugifying are
    /// rejected.
    pub async fn generate_unique_slug(&self, title: &ArticleTitle) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        if base.is_empty() {
            return Err(DomainError::validation(
                "title must contain at least one letter or digit",
            ));
        }

        let base_slug = ArticleSlug::new(base)?;
        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        while self.read_repo.find_by_slug(&candidate).await?.is_some() {
            candidate = base_slug.with_suffix(counter);
            counter += 1;
        }

        tracing::debug!(slug = %candidate, "allocated article slug");
        Ok(candidate)
    }
}
