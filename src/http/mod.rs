//! HTTP layer: router, session-backed auth, page errors.

pub mod auth;
pub mod error;
pub mod routes;
pub mod server;

pub use error::PageError;
pub use server::{app, run_server};
