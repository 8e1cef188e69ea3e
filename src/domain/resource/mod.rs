pub mod entity;
pub mod repository;

pub use entity::{NewResource, Resource, ResourceGroup, ResourceId, group_by_category};
pub use repository::ResourceRepository;
