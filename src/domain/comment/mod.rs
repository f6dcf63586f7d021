pub mod entity;
pub mod value_objects;

pub use entity::{Comment, comments_key};
pub use value_objects::{CommentAuthor, CommentText};
