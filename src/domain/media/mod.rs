pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Media, NewMedia};
pub use repository::MediaRepository;
pub use value_objects::{FileExtension, MediaId, MediaKind, StoredFileName};
