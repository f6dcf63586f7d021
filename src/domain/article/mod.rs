pub mod entity;
pub mod repository;
pub mod share;
pub mod value_objects;

pub use entity::{Article, ensure_unique_ids};
pub use repository::ArticleRepository;
pub use share::ShareLinks;
pub use value_objects::{ArticleId, Category, CategoryFilter};
