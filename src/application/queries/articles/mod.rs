mod admin;
mod public;
mod service;

pub use public::{HOME_ARTICLE_COUNT, SearchArticlesQuery};
pub use service::ArticleQueryService;
