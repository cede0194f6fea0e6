//! Repository implementations for database access.

pub mod posts;

pub use posts::{DbError, PostRepo};
