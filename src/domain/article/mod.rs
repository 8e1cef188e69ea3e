pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{
    Article, ArticleContent, ArticleNeighbours, ArticleUpdate, NewArticle, PublicationState,
    PublicationTransition, PublishedStats,
};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleId, ArticleSlug, ArticleTitle, Category, Tags};
