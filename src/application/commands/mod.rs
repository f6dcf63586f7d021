pub mod comments;
pub mod newsletter;
