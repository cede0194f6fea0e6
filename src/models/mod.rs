//! Domain models and input validation.

pub mod post;
pub mod validation;

pub use post::{NewPost, Post, PostTitle};
pub use validation::ValidationError;
