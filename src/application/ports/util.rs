// src/application/ports/util.rs

/// Maps free text to a URL-safe slug. Implementations must be pure; the
/// uniqueness policy lives in `ArticleSlugService`.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
