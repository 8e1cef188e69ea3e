// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_article;
mod sqlite_media;
mod sqlite_resource;
mod sqlite_timeline;

pub use error::map_sqlx;
pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_media::SqliteMediaRepository;
pub use sqlite_resource::SqliteResourceRepository;
pub use sqlite_timeline::SqliteTimelineRepository;
