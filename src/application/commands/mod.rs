pub mod articles;
pub mod auth;
pub mod media;
pub mod resources;
pub mod timeline;
