// src/presentation/http/controllers/mod.rs
pub mod admin_articles;
pub mod admin_media;
pub mod admin_resources;
pub mod admin_timeline;
pub mod auth;
pub mod public;
