pub mod articles;
pub mod dashboard;
pub mod media;
pub mod resources;
pub mod timeline;
