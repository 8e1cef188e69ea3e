// src/domain/mod.rs
pub mod article;
pub mod errors;
pub mod media;
pub mod pagination;
pub mod resource;
pub mod text;
pub mod timeline;
